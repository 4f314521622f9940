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
        drone::{CreateDroneDto, DroneDto, DroneQueryDto, PaginatedDronesDto, PatchDroneDto},
    },
    server::{
        controller::{json_body, not_found, path_id, query_params},
        error::{auth::AuthError, AppError},
        middleware::{
            access::{Operation, ResourceKind},
            auth::{AccessGuard, Caller},
            throttle::ThrottleScope,
        },
        model::{
            drone::{CreateDroneParams, Drone, DroneFilter, UpdateDroneParams},
            list::PageRequest,
        },
        service::drone::DroneService,
        state::AppState,
        util::link::Links,
    },
};

/// Tag for grouping drone endpoints in OpenAPI documentation
pub static DRONE_TAG: &str = "drone";

const KIND: ResourceKind = ResourceKind::Owned;
const SCOPE: ThrottleScope = ThrottleScope::Drones;

/// List drones.
///
/// Returns one page of drones with optional field filters, name prefix search and
/// ordering. Readable by everyone; throttled under the `drones` scope.
///
/// # Returns
/// - `200 OK` - Page of drones
/// - `400 Bad Request` - Malformed query parameters
/// - `401 Unauthorized` - Invalid token presented
/// - `429 Too Many Requests` - `drones` rate exceeded
#[utoipa::path(
    get,
    path = "/api/drones",
    tag = DRONE_TAG,
    params(PageQueryDto, DroneQueryDto),
    responses(
        (status = 200, description = "Page of drones", body = PaginatedDronesDto),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 429, description = "Throttled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drones(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    RawQuery(raw_query): RawQuery,
    page: Result<Query<PageQueryDto>, QueryRejection>,
    query: Result<Query<DroneQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AccessGuard::new(&state.throttle, &caller);
    guard.require(Operation::List, KIND)?;
    guard.throttle(SCOPE)?;

    let page = PageRequest::from_query(&query_params(page)?, state.pagination);
    let filter = DroneFilter::from_query(query_params(query)?);

    let drones = DroneService::new(&state.db)
        .get_paginated(filter, page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(drones.into_dto(&links, raw_query.as_deref())),
    ))
}

/// Create a drone owned by the caller.
///
/// Any `owner` key in the body is ignored; the owner is always the authenticated caller.
///
/// # Access Control
/// - Authenticated callers only
///
/// # Returns
/// - `201 Created` - Created drone
/// - `400 Bad Request` - Invalid drone data or unknown category
/// - `401 Unauthorized` - No token or invalid token
/// - `429 Too Many Requests` - `drones` rate exceeded
#[utoipa::path(
    post,
    path = "/api/drones",
    tag = DRONE_TAG,
    request_body = CreateDroneDto,
    responses(
        (status = 201, description = "Successfully created drone", body = DroneDto),
        (status = 400, description = "Invalid drone data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 429, description = "Throttled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_drone(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    payload: Result<Json<CreateDroneDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AccessGuard::new(&state.throttle, &caller);
    guard.require(Operation::Create, KIND)?;
    guard.throttle(SCOPE)?;

    let owner_id = caller.user_id().ok_or(AuthError::Unauthenticated)?;
    let params = CreateDroneParams::from_dto(json_body(payload)?);

    let drone = DroneService::new(&state.db).create(params, owner_id).await?;

    Ok((StatusCode::CREATED, Json(drone.into_dto(&links))))
}

/// Get a drone.
///
/// # Returns
/// - `200 OK` - Drone details
/// - `401 Unauthorized` - Invalid token presented
/// - `404 Not Found` - No drone with this id
/// - `429 Too Many Requests` - `drones` rate exceeded
#[utoipa::path(
    get,
    path = "/api/drones/{id}",
    tag = DRONE_TAG,
    params(("id" = i32, Path, description = "Drone ID")),
    responses(
        (status = 200, description = "Drone details", body = DroneDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 429, description = "Throttled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drone(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AccessGuard::new(&state.throttle, &caller);
    guard.require(Operation::Retrieve, KIND)?;
    guard.throttle(SCOPE)?;
    let id = path_id(path)?;

    let drone = DroneService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("Drone", id))?;

    Ok((StatusCode::OK, Json(drone.into_dto(&links))))
}

/// Replace a drone.
///
/// # Access Control
/// - Owner only
///
/// # Returns
/// - `200 OK` - Updated drone
/// - `400 Bad Request` - Invalid drone data
/// - `401 Unauthorized` - No token or invalid token
/// - `403 Forbidden` - Caller does not own the drone
/// - `404 Not Found` - No drone with this id
/// - `429 Too Many Requests` - `drones` rate exceeded
#[utoipa::path(
    put,
    path = "/api/drones/{id}",
    tag = DRONE_TAG,
    params(("id" = i32, Path, description = "Drone ID")),
    request_body = CreateDroneDto,
    responses(
        (status = 200, description = "Successfully updated drone", body = DroneDto),
        (status = 400, description = "Invalid drone data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 429, description = "Throttled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_drone(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreateDroneDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let existing = load_for_write(&state, &caller, path, Operation::Update).await?;

    let params = UpdateDroneParams::from_dto(json_body(payload)?);
    let drone = DroneService::new(&state.db).update(existing, params).await?;

    Ok((StatusCode::OK, Json(drone.into_dto(&links))))
}

/// Partially update a drone.
///
/// # Access Control
/// - Owner only
#[utoipa::path(
    patch,
    path = "/api/drones/{id}",
    tag = DRONE_TAG,
    params(("id" = i32, Path, description = "Drone ID")),
    request_body = PatchDroneDto,
    responses(
        (status = 200, description = "Successfully updated drone", body = DroneDto),
        (status = 400, description = "Invalid drone data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 429, description = "Throttled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_drone(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PatchDroneDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let existing = load_for_write(&state, &caller, path, Operation::Update).await?;

    let params = UpdateDroneParams::from_patch(json_body(payload)?);
    let drone = DroneService::new(&state.db).update(existing, params).await?;

    Ok((StatusCode::OK, Json(drone.into_dto(&links))))
}

/// Delete a drone.
///
/// # Access Control
/// - Owner only
///
/// # Returns
/// - `204 No Content` - Drone deleted
/// - `401 Unauthorized` - No token or invalid token
/// - `403 Forbidden` - Caller does not own the drone
/// - `404 Not Found` - No drone with this id
/// - `429 Too Many Requests` - `drones` rate exceeded
#[utoipa::path(
    delete,
    path = "/api/drones/{id}",
    tag = DRONE_TAG,
    params(("id" = i32, Path, description = "Drone ID")),
    responses(
        (status = 204, description = "Successfully deleted drone"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 429, description = "Throttled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_drone(
    State(state): State<AppState>,
    caller: Caller,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let existing = load_for_write(&state, &caller, path, Operation::Delete).await?;

    DroneService::new(&state.db).delete(existing.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Runs the gates for a write on a single drone and returns the loaded drone.
///
/// The loaded drone is handed on to the service so the write reuses this lookup.
async fn load_for_write(
    state: &AppState,
    caller: &Caller,
    path: Result<Path<i32>, PathRejection>,
    operation: Operation,
) -> Result<Drone, AppError> {
    let guard = AccessGuard::new(&state.throttle, caller);
    guard.require(operation, KIND)?;
    guard.throttle(SCOPE)?;
    let id = path_id(path)?;

    let drone = DroneService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("Drone", id))?;

    guard.require_owner(operation, KIND, drone.owner_id)?;

    Ok(drone)
}
