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
        pilot::{CreatePilotDto, PaginatedPilotsDto, PatchPilotDto, PilotDto, PilotQueryDto},
    },
    server::{
        controller::{json_body, not_found, path_id, query_params},
        error::AppError,
        middleware::{
            access::{Operation, ResourceKind},
            auth::{AccessGuard, Caller},
            throttle::ThrottleScope,
        },
        model::{
            list::PageRequest,
            pilot::{CreatePilotParams, Pilot, PilotFilter, UpdatePilotParams},
        },
        service::pilot::PilotService,
        state::AppState,
        util::link::Links,
    },
};

/// Tag for grouping pilot endpoints in OpenAPI documentation
pub static PILOT_TAG: &str = "pilot";

const KIND: ResourceKind = ResourceKind::Gated;
const SCOPE: ThrottleScope = ThrottleScope::Pilots;

/// List pilots.
///
/// # Access Control
/// - Authenticated callers only, throttled under the `pilots` scope
///
/// # Returns
/// - `200 OK` - Page of pilots with their competitions
/// - `400 Bad Request` - Malformed query parameters
/// - `401 Unauthorized` - No token or invalid token
/// - `429 Too Many Requests` - `pilots` rate exceeded
#[utoipa::path(
    get,
    path = "/api/pilots",
    tag = PILOT_TAG,
    params(PageQueryDto, PilotQueryDto),
    responses(
        (status = 200, description = "Page of pilots", body = PaginatedPilotsDto),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 429, description = "Throttled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pilots(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    RawQuery(raw_query): RawQuery,
    page: Result<Query<PageQueryDto>, QueryRejection>,
    query: Result<Query<PilotQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AccessGuard::new(&state.throttle, &caller);
    guard.require(Operation::List, KIND)?;
    guard.throttle(SCOPE)?;

    let page = PageRequest::from_query(&query_params(page)?, state.pagination);
    let filter = PilotFilter::from_query(query_params(query)?);

    let pilots = PilotService::new(&state.db)
        .get_paginated(filter, page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(pilots.into_dto(&links, raw_query.as_deref())),
    ))
}

/// Create a pilot.
///
/// # Returns
/// - `201 Created` - Created pilot
/// - `400 Bad Request` - Invalid pilot data
/// - `401 Unauthorized` - No token or invalid token
/// - `429 Too Many Requests` - `pilots` rate exceeded
#[utoipa::path(
    post,
    path = "/api/pilots",
    tag = PILOT_TAG,
    request_body = CreatePilotDto,
    responses(
        (status = 201, description = "Successfully created pilot", body = PilotDto),
        (status = 400, description = "Invalid pilot data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 429, description = "Throttled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pilot(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    payload: Result<Json<CreatePilotDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AccessGuard::new(&state.throttle, &caller);
    guard.require(Operation::Create, KIND)?;
    guard.throttle(SCOPE)?;

    let params = CreatePilotParams::from_dto(json_body(payload)?);
    let pilot = PilotService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(pilot.into_dto(&links))))
}

/// Get a pilot with their competitions.
#[utoipa::path(
    get,
    path = "/api/pilots/{id}",
    tag = PILOT_TAG,
    params(("id" = i32, Path, description = "Pilot ID")),
    responses(
        (status = 200, description = "Pilot details", body = PilotDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 429, description = "Throttled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pilot(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = load(&state, &caller, path, Operation::Retrieve).await?;

    Ok((StatusCode::OK, Json(pilot.into_dto(&links))))
}

/// Replace a pilot.
#[utoipa::path(
    put,
    path = "/api/pilots/{id}",
    tag = PILOT_TAG,
    params(("id" = i32, Path, description = "Pilot ID")),
    request_body = CreatePilotDto,
    responses(
        (status = 200, description = "Successfully updated pilot", body = PilotDto),
        (status = 400, description = "Invalid pilot data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 429, description = "Throttled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pilot(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreatePilotDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let existing = load(&state, &caller, path, Operation::Update).await?;

    let params = UpdatePilotParams::from_dto(json_body(payload)?);
    let pilot = PilotService::new(&state.db).update(existing, params).await?;

    Ok((StatusCode::OK, Json(pilot.into_dto(&links))))
}

/// Partially update a pilot.
#[utoipa::path(
    patch,
    path = "/api/pilots/{id}",
    tag = PILOT_TAG,
    params(("id" = i32, Path, description = "Pilot ID")),
    request_body = PatchPilotDto,
    responses(
        (status = 200, description = "Successfully updated pilot", body = PilotDto),
        (status = 400, description = "Invalid pilot data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 429, description = "Throttled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_pilot(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PatchPilotDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let existing = load(&state, &caller, path, Operation::Update).await?;

    let params = UpdatePilotParams::from_patch(json_body(payload)?);
    let pilot = PilotService::new(&state.db).update(existing, params).await?;

    Ok((StatusCode::OK, Json(pilot.into_dto(&links))))
}

/// Delete a pilot along with their competitions.
#[utoipa::path(
    delete,
    path = "/api/pilots/{id}",
    tag = PILOT_TAG,
    params(("id" = i32, Path, description = "Pilot ID")),
    responses(
        (status = 204, description = "Successfully deleted pilot"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 429, description = "Throttled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pilot(
    State(state): State<AppState>,
    caller: Caller,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let existing = load(&state, &caller, path, Operation::Delete).await?;

    PilotService::new(&state.db).delete(existing.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn load(
    state: &AppState,
    caller: &Caller,
    path: Result<Path<i32>, PathRejection>,
    operation: Operation,
) -> Result<Pilot, AppError> {
    let guard = AccessGuard::new(&state.throttle, caller);
    guard.require(operation, KIND)?;
    guard.throttle(SCOPE)?;
    let id = path_id(path)?;

    PilotService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("Pilot", id))
}
