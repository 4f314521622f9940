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
        drone_category::{
            CreateDroneCategoryDto, DroneCategoryDto, DroneCategoryQueryDto,
            PaginatedDroneCategoriesDto, PatchDroneCategoryDto,
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
            drone_category::{
                CreateDroneCategoryParams, DroneCategoryFilter, UpdateDroneCategoryParams,
            },
            list::PageRequest,
        },
        service::drone_category::DroneCategoryService,
        state::AppState,
        util::link::Links,
    },
};

/// Tag for grouping drone category endpoints in OpenAPI documentation
pub static DRONE_CATEGORY_TAG: &str = "drone-category";

const KIND: ResourceKind = ResourceKind::Public;

/// List drone categories.
///
/// Returns one page of drone categories with optional exact-name filtering, case-insensitive
/// name prefix search and ordering. Open to everyone.
///
/// # Returns
/// - `200 OK` - Page of categories
/// - `400 Bad Request` - Malformed query parameters
/// - `401 Unauthorized` - Invalid token presented
#[utoipa::path(
    get,
    path = "/api/drone-categories",
    tag = DRONE_CATEGORY_TAG,
    params(PageQueryDto, DroneCategoryQueryDto),
    responses(
        (status = 200, description = "Page of drone categories", body = PaginatedDroneCategoriesDto),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drone_categories(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    RawQuery(raw_query): RawQuery,
    page: Result<Query<PageQueryDto>, QueryRejection>,
    query: Result<Query<DroneCategoryQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    AccessGuard::new(&state.throttle, &caller).require(Operation::List, KIND)?;

    let page = PageRequest::from_query(&query_params(page)?, state.pagination);
    let filter = DroneCategoryFilter::from_query(query_params(query)?);

    let categories = DroneCategoryService::new(&state.db)
        .get_paginated(filter, page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(categories.into_dto(&links, raw_query.as_deref())),
    ))
}

/// Create a drone category.
///
/// # Returns
/// - `201 Created` - Created category
/// - `400 Bad Request` - Blank, too long or duplicate name, or malformed body
/// - `401 Unauthorized` - Invalid token presented
#[utoipa::path(
    post,
    path = "/api/drone-categories",
    tag = DRONE_CATEGORY_TAG,
    request_body = CreateDroneCategoryDto,
    responses(
        (status = 201, description = "Successfully created drone category", body = DroneCategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_drone_category(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    payload: Result<Json<CreateDroneCategoryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AccessGuard::new(&state.throttle, &caller).require(Operation::Create, KIND)?;

    let params = CreateDroneCategoryParams::from_dto(json_body(payload)?);

    let category = DroneCategoryService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(category.into_dto(&links))))
}

/// Get a drone category with links to its drones.
///
/// # Returns
/// - `200 OK` - Category details
/// - `401 Unauthorized` - Invalid token presented
/// - `404 Not Found` - No category with this id
#[utoipa::path(
    get,
    path = "/api/drone-categories/{id}",
    tag = DRONE_CATEGORY_TAG,
    params(("id" = i32, Path, description = "Drone category ID")),
    responses(
        (status = 200, description = "Drone category details", body = DroneCategoryDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Drone category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drone_category(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    AccessGuard::new(&state.throttle, &caller).require(Operation::Retrieve, KIND)?;
    let id = path_id(path)?;

    let category = DroneCategoryService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("Drone category", id))?;

    Ok((StatusCode::OK, Json(category.into_dto(&links))))
}

/// Replace a drone category.
///
/// # Returns
/// - `200 OK` - Updated category
/// - `400 Bad Request` - Invalid category data
/// - `401 Unauthorized` - Invalid token presented
/// - `404 Not Found` - No category with this id
#[utoipa::path(
    put,
    path = "/api/drone-categories/{id}",
    tag = DRONE_CATEGORY_TAG,
    params(("id" = i32, Path, description = "Drone category ID")),
    request_body = CreateDroneCategoryDto,
    responses(
        (status = 200, description = "Successfully updated drone category", body = DroneCategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Drone category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_drone_category(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreateDroneCategoryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AccessGuard::new(&state.throttle, &caller).require(Operation::Update, KIND)?;
    let id = path_id(path)?;

    let service = DroneCategoryService::new(&state.db);
    let existing = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("Drone category", id))?;

    let params = UpdateDroneCategoryParams::from_dto(json_body(payload)?);
    let category = service.update(existing, params).await?;

    Ok((StatusCode::OK, Json(category.into_dto(&links))))
}

/// Partially update a drone category.
#[utoipa::path(
    patch,
    path = "/api/drone-categories/{id}",
    tag = DRONE_CATEGORY_TAG,
    params(("id" = i32, Path, description = "Drone category ID")),
    request_body = PatchDroneCategoryDto,
    responses(
        (status = 200, description = "Successfully updated drone category", body = DroneCategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Drone category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_drone_category(
    State(state): State<AppState>,
    caller: Caller,
    links: Links,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PatchDroneCategoryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AccessGuard::new(&state.throttle, &caller).require(Operation::Update, KIND)?;
    let id = path_id(path)?;

    let service = DroneCategoryService::new(&state.db);
    let existing = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("Drone category", id))?;

    let params = UpdateDroneCategoryParams::from_patch(json_body(payload)?);
    let category = service.update(existing, params).await?;

    Ok((StatusCode::OK, Json(category.into_dto(&links))))
}

/// Delete a drone category together with its drones.
///
/// # Returns
/// - `204 No Content` - Category deleted
/// - `401 Unauthorized` - Invalid token presented
/// - `404 Not Found` - No category with this id
#[utoipa::path(
    delete,
    path = "/api/drone-categories/{id}",
    tag = DRONE_CATEGORY_TAG,
    params(("id" = i32, Path, description = "Drone category ID")),
    responses(
        (status = 204, description = "Successfully deleted drone category"),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Drone category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_drone_category(
    State(state): State<AppState>,
    caller: Caller,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    AccessGuard::new(&state.throttle, &caller).require(Operation::Delete, KIND)?;
    let id = path_id(path)?;

    let service = DroneCategoryService::new(&state.db);
    service
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("Drone category", id))?;

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
