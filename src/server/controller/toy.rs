use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        toy::{CreateToyDto, ToyDto},
    },
    server::{
        controller::{json_body, not_found, path_id},
        error::AppError,
        middleware::{
            access::{Operation, ResourceKind},
            auth::{AccessGuard, Caller},
        },
        model::toy::{Toy, ToyParams},
        service::toy::ToyService,
        state::AppState,
    },
};

/// Tag for grouping toy endpoints in OpenAPI documentation
pub static TOY_TAG: &str = "toy";

const KIND: ResourceKind = ResourceKind::Public;

/// List every toy. Not paginated.
#[utoipa::path(
    get,
    path = "/api/toys",
    tag = TOY_TAG,
    responses(
        (status = 200, description = "All toys", body = Vec<ToyDto>),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_toys(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    AccessGuard::new(&state.throttle, &caller).require(Operation::List, KIND)?;

    let toys = ToyService::new(&state.db).get_all().await?;
    let toys: Vec<ToyDto> = toys.into_iter().map(Toy::into_dto).collect();

    Ok((StatusCode::OK, Json(toys)))
}

#[utoipa::path(
    post,
    path = "/api/toys",
    tag = TOY_TAG,
    request_body = CreateToyDto,
    responses(
        (status = 201, description = "Successfully created toy", body = ToyDto),
        (status = 400, description = "Invalid toy data", body = ErrorDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_toy(
    State(state): State<AppState>,
    caller: Caller,
    payload: Result<Json<CreateToyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AccessGuard::new(&state.throttle, &caller).require(Operation::Create, KIND)?;

    let params = ToyParams::from_dto(json_body(payload)?);
    let toy = ToyService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(toy.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/toys/{id}",
    tag = TOY_TAG,
    params(("id" = i32, Path, description = "Toy ID")),
    responses(
        (status = 200, description = "Toy details", body = ToyDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Toy not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_toy(
    State(state): State<AppState>,
    caller: Caller,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let toy = load(&state, &caller, path, Operation::Retrieve).await?;

    Ok((StatusCode::OK, Json(toy.into_dto())))
}

/// Replace a toy. Every writable field must be supplied.
#[utoipa::path(
    put,
    path = "/api/toys/{id}",
    tag = TOY_TAG,
    params(("id" = i32, Path, description = "Toy ID")),
    request_body = CreateToyDto,
    responses(
        (status = 200, description = "Successfully updated toy", body = ToyDto),
        (status = 400, description = "Invalid toy data", body = ErrorDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Toy not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_toy(
    State(state): State<AppState>,
    caller: Caller,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreateToyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let existing = load(&state, &caller, path, Operation::Update).await?;

    let params = ToyParams::from_dto(json_body(payload)?);
    let toy = ToyService::new(&state.db)
        .update(existing.id, params)
        .await?;

    Ok((StatusCode::OK, Json(toy.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/toys/{id}",
    tag = TOY_TAG,
    params(("id" = i32, Path, description = "Toy ID")),
    responses(
        (status = 204, description = "Successfully deleted toy"),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Toy not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_toy(
    State(state): State<AppState>,
    caller: Caller,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let existing = load(&state, &caller, path, Operation::Delete).await?;

    ToyService::new(&state.db).delete(existing.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn load(
    state: &AppState,
    caller: &Caller,
    path: Result<Path<i32>, PathRejection>,
    operation: Operation,
) -> Result<Toy, AppError> {
    AccessGuard::new(&state.throttle, caller).require(operation, KIND)?;
    let id = path_id(path)?;

    ToyService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("Toy", id))
}
