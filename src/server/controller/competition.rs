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
        competition::{
            CompetitionDto, CompetitionQueryDto, CreateCompetitionDto, PaginatedCompetitionsDto,
            PatchCompetitionDto,
        },
    },
    server::{
        controller::{json_body, not_found, path_id, query_params},
        error::AppError,
        middleware::{
            access::{Operation, ResourceKind},
            auth::{AccessGuard, Caller},
        },
        model::{
            competition::{
                Competition, CompetitionFilter, CreateCompetitionParams, UpdateCompetitionParams,
            },
            list::PageRequest,
        },
        service::competition::CompetitionService,
        state::AppState,
        util::link::Links,
    },
};

/// Tag for grouping competition endpoints in OpenAPI documentation
pub static COMPETITION_TAG: &str = "competition";

const KIND: ResourceKind = ResourceKind::Public;

/// List competitions.
///
/// Supports exact filters, date and distance ranges, drone and pilot name filters and
/// ordering. Results default to the longest distance first.
///
/// # Returns
/// - `200 OK` - Page of competitions
/// - `400 Bad Request` - Malformed query parameters
/// - `401 Unauthorized` - Invalid token presented
#[utoipa::path(
    get,
    path = "/api/competitions",
    tag = COMPETITION_TAG,
    params(PageQueryDto, CompetitionQueryDto),
    responses(
        (status = 200, description = "Page of competitions", body = PaginatedCompetitionsDto),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_competitions(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    RawQuery(raw_query): RawQuery,
    page: Result<Query<PageQueryDto>, QueryRejection>,
    query: Result<Query<CompetitionQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    AccessGuard::new(&state.throttle, &caller).require(Operation::List, KIND)?;

    let page = PageRequest::from_query(&query_params(page)?, state.pagination);
    let filter = CompetitionFilter::from_query(query_params(query)?);

    let competitions = CompetitionService::new(&state.db)
        .get_paginated(filter, page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(competitions.into_dto(&links, raw_query.as_deref())),
    ))
}

/// Record a competition result.
///
/// `pilot` and `drone` are given by name.
///
/// # Returns
/// - `201 Created` - Created competition
/// - `400 Bad Request` - Invalid data or unknown pilot or drone
/// - `401 Unauthorized` - Invalid token presented
#[utoipa::path(
    post,
    path = "/api/competitions",
    tag = COMPETITION_TAG,
    request_body = CreateCompetitionDto,
    responses(
        (status = 201, description = "Successfully created competition", body = CompetitionDto),
        (status = 400, description = "Invalid competition data", body = ErrorDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_competition(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    payload: Result<Json<CreateCompetitionDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AccessGuard::new(&state.throttle, &caller).require(Operation::Create, KIND)?;

    let params = CreateCompetitionParams::from_dto(json_body(payload)?);
    let competition = CompetitionService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(competition.into_dto(&links))))
}

#[utoipa::path(
    get,
    path = "/api/competitions/{id}",
    tag = COMPETITION_TAG,
    params(("id" = i32, Path, description = "Competition ID")),
    responses(
        (status = 200, description = "Competition details", body = CompetitionDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Competition not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_competition(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let competition = load(&state, &caller, path, Operation::Retrieve).await?;

    Ok((StatusCode::OK, Json(competition.into_dto(&links))))
}

#[utoipa::path(
    put,
    path = "/api/competitions/{id}",
    tag = COMPETITION_TAG,
    params(("id" = i32, Path, description = "Competition ID")),
    request_body = CreateCompetitionDto,
    responses(
        (status = 200, description = "Successfully updated competition", body = CompetitionDto),
        (status = 400, description = "Invalid competition data", body = ErrorDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Competition not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_competition(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreateCompetitionDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let existing = load(&state, &caller, path, Operation::Update).await?;

    let params = UpdateCompetitionParams::from_dto(json_body(payload)?);
    let competition = CompetitionService::new(&state.db)
        .update(existing, params)
        .await?;

    Ok((StatusCode::OK, Json(competition.into_dto(&links))))
}

#[utoipa::path(
    patch,
    path = "/api/competitions/{id}",
    tag = COMPETITION_TAG,
    params(("id" = i32, Path, description = "Competition ID")),
    request_body = PatchCompetitionDto,
    responses(
        (status = 200, description = "Successfully updated competition", body = CompetitionDto),
        (status = 400, description = "Invalid competition data", body = ErrorDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Competition not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_competition(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PatchCompetitionDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let existing = load(&state, &caller, path, Operation::Update).await?;

    let params = UpdateCompetitionParams::from_patch(json_body(payload)?);
    let competition = CompetitionService::new(&state.db)
        .update(existing, params)
        .await?;

    Ok((StatusCode::OK, Json(competition.into_dto(&links))))
}

#[utoipa::path(
    delete,
    path = "/api/competitions/{id}",
    tag = COMPETITION_TAG,
    params(("id" = i32, Path, description = "Competition ID")),
    responses(
        (status = 204, description = "Successfully deleted competition"),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Competition not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_competition(
    State(state): State<AppState>,
    caller: Caller,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let existing = load(&state, &caller, path, Operation::Delete).await?;

    CompetitionService::new(&state.db).delete(existing.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn load(
    state: &AppState,
    caller: &Caller,
    path: Result<Path<i32>, PathRejection>,
    operation: Operation,
) -> Result<Competition, AppError> {
    AccessGuard::new(&state.throttle, caller).require(operation, KIND)?;
    let id = path_id(path)?;

    CompetitionService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("Competition", id))
}
