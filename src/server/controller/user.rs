use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, RawQuery, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PageQueryDto},
        user::{CreateUserDto, PaginatedUsersDto, PatchUserDto, RegisteredUserDto, UserDto},
    },
    server::{
        controller::{json_body, not_found, path_id, query_params},
        error::AppError,
        middleware::{
            access::{Operation, ResourceKind},
            auth::{AccessGuard, Caller},
        },
        model::{
            list::PageRequest,
            user::{CreateUserParams, UpdateUserParams, User},
        },
        service::user::UserService,
        state::AppState,
        util::link::Links,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Listing, lookup and registration are open; a user account is owned by itself.
const COLLECTION_KIND: ResourceKind = ResourceKind::Public;
const ACCOUNT_KIND: ResourceKind = ResourceKind::Owned;

/// List users with links to the drones they own.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(PageQueryDto),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    RawQuery(raw_query): RawQuery,
    page: Result<Query<PageQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    AccessGuard::new(&state.throttle, &caller).require(Operation::List, COLLECTION_KIND)?;

    let page = PageRequest::from_query(&query_params(page)?, state.pagination);
    let users = UserService::new(&state.db).get_paginated(page).await?;

    Ok((
        StatusCode::OK,
        Json(users.into_dto(&links, raw_query.as_deref())),
    ))
}

/// Register a user.
///
/// The response carries the user's API token. It is not readable again afterwards except
/// by rotating it.
///
/// # Returns
/// - `201 Created` - Registered user and token
/// - `400 Bad Request` - Invalid or duplicate username
/// - `401 Unauthorized` - Invalid token presented
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully registered user", body = RegisteredUserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AccessGuard::new(&state.throttle, &caller).require(Operation::Create, COLLECTION_KIND)?;

    let params = CreateUserParams::from_dto(json_body(payload)?);
    let registered = UserService::new(&state.db).register(params).await?;

    Ok((StatusCode::CREATED, Json(registered.into_dto(&links))))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    AccessGuard::new(&state.throttle, &caller).require(Operation::Retrieve, COLLECTION_KIND)?;
    let id = path_id(path)?;

    let user = UserService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("User", id))?;

    Ok((StatusCode::OK, Json(user.into_dto(&links))))
}

/// Rename the caller's own account.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let existing = load_own_account(&state, &caller, path, Operation::Update).await?;

    let params = UpdateUserParams::from_dto(json_body(payload)?);
    let user = UserService::new(&state.db).update(existing, params).await?;

    Ok((StatusCode::OK, Json(user.into_dto(&links))))
}

#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = PatchUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_user(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PatchUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let existing = load_own_account(&state, &caller, path, Operation::Update).await?;

    let params = UpdateUserParams::from_patch(json_body(payload)?);
    let user = UserService::new(&state.db).update(existing, params).await?;

    Ok((StatusCode::OK, Json(user.into_dto(&links))))
}

/// Delete the caller's own account along with their token and drones.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    caller: Caller,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let existing = load_own_account(&state, &caller, path, Operation::Delete).await?;

    UserService::new(&state.db).delete(existing.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn load_own_account(
    state: &AppState,
    caller: &Caller,
    path: Result<Path<i32>, PathRejection>,
    operation: Operation,
) -> Result<User, AppError> {
    let guard = AccessGuard::new(&state.throttle, caller);
    guard.require(operation, ACCOUNT_KIND)?;
    let id = path_id(path)?;

    let user = UserService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("User", id))?;

    guard.require_owner(operation, ACCOUNT_KIND, user.id)?;

    Ok(user)
}
