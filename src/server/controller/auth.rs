use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, user::TokenDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            access::{Operation, ResourceKind},
            auth::{AccessGuard, Caller},
        },
        service::token::TokenService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Rotate the caller's API token.
///
/// The presented token stops working immediately and the new key is returned.
///
/// # Access Control
/// - Authenticated callers only
///
/// # Returns
/// - `200 OK` - New token
/// - `401 Unauthorized` - No token or invalid token
#[utoipa::path(
    post,
    path = "/api/auth/token/rotate",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "New token issued", body = TokenDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rotate_token(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    AccessGuard::new(&state.throttle, &caller).require(Operation::Create, ResourceKind::Gated)?;

    let user_id = caller.user_id().ok_or(AuthError::Unauthenticated)?;
    let token = TokenService::new(&state.db).rotate(user_id).await?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}
