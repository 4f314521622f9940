//! HTTP request handlers.
//!
//! Every resource handler follows the same sequence: view-level access check, throttle,
//! instance lookup (404), object-level access check, then body parsing and the service
//! call. Body, path and query rejections are therefore only reported to callers that were
//! allowed to make the request.

pub mod auth;
pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;
pub mod root;
pub mod toy;
pub mod user;

#[cfg(test)]
mod test;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    Json,
};

use crate::server::error::AppError;

/// Unwraps a JSON body, turning a rejection into 400.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Unwraps query parameters, turning a rejection into 400.
pub(crate) fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Unwraps an integer id path segment; anything else addresses no resource.
pub(crate) fn path_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::NotFound("Not found.".to_string()))
}

pub(crate) fn not_found(resource: &str, id: i32) -> AppError {
    AppError::NotFound(format!("{} {} not found", resource, id))
}
