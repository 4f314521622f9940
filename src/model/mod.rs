//! Wire-level request and response DTOs.
//!
//! Everything in this module is serialized to or deserialized from HTTP bodies and query
//! strings. Server-side domain models live in `server::model` and convert into these types
//! at the controller boundary.

pub mod api;
pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;
pub mod toy;
pub mod user;
