//! Request gating: caller resolution, access decisions and throttling.
//!
//! - `access` - pure access decision over operation, resource kind, owner and caller
//! - `throttle` - fixed-window rate limiting per caller and scope
//! - `auth` - `Caller` extractor resolving tokens, and `AccessGuard` combining both gates

pub mod access;
pub mod auth;
pub mod throttle;
