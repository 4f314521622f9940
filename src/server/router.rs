use axum::{response::IntoResponse, routing::get, routing::post, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{auth, competition, drone, drone_category, pilot, root, toy, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Drones API", description = "Drone racing competition records"),
    paths(
        root::api_root,
        root::health,
        drone_category::get_drone_categories,
        drone_category::create_drone_category,
        drone_category::get_drone_category,
        drone_category::update_drone_category,
        drone_category::patch_drone_category,
        drone_category::delete_drone_category,
        drone::get_drones,
        drone::create_drone,
        drone::get_drone,
        drone::update_drone,
        drone::patch_drone,
        drone::delete_drone,
        pilot::get_pilots,
        pilot::create_pilot,
        pilot::get_pilot,
        pilot::update_pilot,
        pilot::patch_pilot,
        pilot::delete_pilot,
        competition::get_competitions,
        competition::create_competition,
        competition::get_competition,
        competition::update_competition,
        competition::patch_competition,
        competition::delete_competition,
        user::get_users,
        user::create_user,
        user::get_user,
        user::update_user,
        user::patch_user,
        user::delete_user,
        auth::rotate_token,
        toy::get_toys,
        toy::create_toy,
        toy::get_toy,
        toy::update_toy,
        toy::delete_toy,
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(root::health))
        .route("/api", get(root::api_root))
        .route("/api/openapi.json", get(openapi))
        .route(
            "/api/drone-categories",
            get(drone_category::get_drone_categories).post(drone_category::create_drone_category),
        )
        .route(
            "/api/drone-categories/{id}",
            get(drone_category::get_drone_category)
                .put(drone_category::update_drone_category)
                .patch(drone_category::patch_drone_category)
                .delete(drone_category::delete_drone_category),
        )
        .route(
            "/api/drones",
            get(drone::get_drones).post(drone::create_drone),
        )
        .route(
            "/api/drones/{id}",
            get(drone::get_drone)
                .put(drone::update_drone)
                .patch(drone::patch_drone)
                .delete(drone::delete_drone),
        )
        .route(
            "/api/pilots",
            get(pilot::get_pilots).post(pilot::create_pilot),
        )
        .route(
            "/api/pilots/{id}",
            get(pilot::get_pilot)
                .put(pilot::update_pilot)
                .patch(pilot::patch_pilot)
                .delete(pilot::delete_pilot),
        )
        .route(
            "/api/competitions",
            get(competition::get_competitions).post(competition::create_competition),
        )
        .route(
            "/api/competitions/{id}",
            get(competition::get_competition)
                .put(competition::update_competition)
                .patch(competition::patch_competition)
                .delete(competition::delete_competition),
        )
        .route("/api/users", get(user::get_users).post(user::create_user))
        .route(
            "/api/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .patch(user::patch_user)
                .delete(user::delete_user),
        )
        .route("/api/auth/token/rotate", post(auth::rotate_token))
        .route("/api/toys", get(toy::get_toys).post(toy::create_toy))
        .route(
            "/api/toys/{id}",
            get(toy::get_toy)
                .put(toy::update_toy)
                .delete(toy::delete_toy),
        )
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
