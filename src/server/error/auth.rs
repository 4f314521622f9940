use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Access decision failures.
///
/// Produced by `AccessGuard` when the access decision for a request is a deny. The
/// variants mirror the deny reasons of the access decision unit one-to-one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No token was presented but the operation requires an authenticated caller.
    #[error("Authentication credentials were not provided.")]
    Unauthenticated,

    /// A token was presented but it does not resolve to a user.
    #[error("Invalid token.")]
    InvalidToken,

    /// An authenticated caller attempted to modify a resource owned by someone else.
    #[error("You do not have permission to perform this action.")]
    NotOwner,
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized with `WWW-Authenticate: Token` - For `Unauthenticated` and `InvalidToken`
/// - 403 Forbidden - For `NotOwner`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(ErrorDto::message(self.to_string()));

        match self {
            Self::Unauthenticated | Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Token")],
                body,
            )
                .into_response(),
            Self::NotOwner => (StatusCode::FORBIDDEN, body).into_response(),
        }
    }
}
