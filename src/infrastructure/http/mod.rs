//! HTTP REST API routes

mod creation_routes;
mod reference_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Creation session routes
        .route("/api/creation/sessions", post(creation_routes::start_session))
        .route(
            "/api/creation/sessions/{id}",
            get(creation_routes::get_session).delete(creation_routes::abandon_session),
        )
        .route(
            "/api/creation/sessions/{id}/intents",
            post(creation_routes::apply_intent),
        )
        .route(
            "/api/creation/sessions/{id}/next",
            post(creation_routes::next_step),
        )
        .route(
            "/api/creation/sessions/{id}/previous",
            post(creation_routes::previous_step),
        )
        .route(
            "/api/creation/sessions/{id}/step",
            post(creation_routes::go_to_step),
        )
        .route(
            "/api/creation/sessions/{id}/equipment",
            get(creation_routes::available_equipment),
        )
        .route(
            "/api/creation/sessions/{id}/submit",
            post(creation_routes::submit),
        )
        // Saved character routes
        .route(
            "/api/creation/characters",
            get(creation_routes::list_characters),
        )
        .route(
            "/api/creation/characters/{id}",
            get(creation_routes::get_character),
        )
        // Reference data routes
        .route(
            "/api/reference/attributes",
            get(reference_routes::list_attributes),
        )
        .route("/api/reference/races", get(reference_routes::list_races))
        .route("/api/reference/classes", get(reference_routes::list_classes))
        .route("/api/reference/skills", get(reference_routes::list_skills))
        .route(
            "/api/reference/backgrounds",
            get(reference_routes::list_backgrounds),
        )
        .route("/api/reference/steps", get(reference_routes::list_steps))
        .route(
            "/api/reference/equipment",
            get(reference_routes::list_equipment),
        )
        .route(
            "/api/reference/equipment/{name}",
            get(reference_routes::find_equipment),
        )
}
