//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod list;
pub mod pilot;
pub mod toy;
pub mod user;
