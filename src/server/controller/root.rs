use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ApiRootDto, HealthDto},
    server::util::link::{
        Links, COMPETITIONS_PATH, DRONES_PATH, DRONE_CATEGORIES_PATH, PILOTS_PATH, TOYS_PATH,
        USERS_PATH,
    },
};

/// Tag for grouping API root and health endpoints in OpenAPI documentation
pub static ROOT_TAG: &str = "root";

/// Links to every collection.
#[utoipa::path(
    get,
    path = "/api",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "Collection links", body = ApiRootDto)
    ),
)]
pub async fn api_root(links: Links) -> impl IntoResponse {
    let root = ApiRootDto {
        drone_categories: links.url(DRONE_CATEGORIES_PATH),
        drones: links.url(DRONES_PATH),
        pilots: links.url(PILOTS_PATH),
        competitions: links.url(COMPETITIONS_PATH),
        users: links.url(USERS_PATH),
        toys: links.url(TOYS_PATH),
    };

    (StatusCode::OK, Json(root))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "Service is up", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
        }),
    )
}
