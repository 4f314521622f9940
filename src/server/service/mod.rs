//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Field checks and name uniqueness, reported per field
//! - **Reference resolution**: Turning names in payloads into foreign keys
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;
pub mod token;
pub mod toy;
pub mod user;

use sea_orm::DbErr;

use crate::server::{
    error::AppError,
    util::validate::{is_unique_violation, FieldErrors},
};

/// Converts a unique constraint violation on `field` into a validation error.
///
/// Covers the window between a service's uniqueness check and the insert; any other
/// database error passes through unchanged.
pub(crate) fn unique_field_error(err: DbErr, field: &str, message: &str) -> AppError {
    if is_unique_violation(&err) {
        let mut errors = FieldErrors::new();
        errors.add(field, message);
        AppError::Validation(errors)
    } else {
        AppError::DbErr(err)
    }
}
