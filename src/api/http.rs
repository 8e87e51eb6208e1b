//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{events, registrations, users};
use super::AppState;
use crate::{NAME, VERSION};

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Service banner and health check
        .route("/", get(root))
        .route("/health", get(health_check))
        // Users
        .route("/users", post(users::create_user))
        .route("/users/:user_id", get(users::get_user))
        .route(
            "/users/:user_id/registrations",
            get(registrations::get_user_registrations),
        )
        // Events
        .route("/events", post(events::create_event).get(events::list_events))
        .route("/events/:event_id", get(events::get_event))
        // Registrations
        .route(
            "/events/:event_id/registrations",
            post(registrations::register_for_event).get(registrations::get_event_registrations),
        )
        .route(
            "/events/:event_id/registrations/:user_id",
            delete(registrations::unregister_from_event),
        )
        .layer(cors)
        .with_state(state)
}

/// Service banner
async fn root() -> Json<Value> {
    Json(json!({ "message": NAME, "version": VERSION }))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
