//! Registration endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{decode_path_param, error_response};
use crate::api::AppState;
use crate::types::{Event, Registration};

/// Request body for registering a user
#[derive(Debug, Deserialize)]
pub struct RegistrationRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Response for an event's registration listing
#[derive(Debug, Serialize)]
pub struct RegistrationListResponse {
    pub registrations: Vec<Registration>,
    pub count: usize,
}

/// Response for a user's active events
#[derive(Debug, Serialize)]
pub struct UserRegistrationsResponse {
    pub events: Vec<Event>,
    pub count: usize,
}

/// POST /events/:event_id/registrations - Register a user for an event
pub async fn register_for_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(request): Json<RegistrationRequest>,
) -> impl IntoResponse {
    let event_id = decode_path_param(&event_id);

    match state.engine.register_user(&request.user_id, &event_id) {
        Ok(registration) => (StatusCode::CREATED, Json(registration)).into_response(),
        Err(err) => error_response(err).into_response(),
    }
}

/// DELETE /events/:event_id/registrations/:user_id - Unregister a user
pub async fn unregister_from_event(
    State(state): State<Arc<AppState>>,
    Path((event_id, user_id)): Path<(String, String)>,
) -> impl IntoResponse {
    let event_id = decode_path_param(&event_id);
    let user_id = decode_path_param(&user_id);

    match state.engine.unregister_user(&user_id, &event_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err).into_response(),
    }
}

/// GET /events/:event_id/registrations - All registrations for an event
pub async fn get_event_registrations(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> impl IntoResponse {
    let event_id = decode_path_param(&event_id);

    let registrations = state.engine.get_event_registrations(&event_id);
    let count = registrations.len();
    Json(RegistrationListResponse {
        registrations,
        count,
    })
}

/// GET /users/:user_id/registrations - Events where the user is ACTIVE
pub async fn get_user_registrations(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    let user_id = decode_path_param(&user_id);

    let events = state.engine.get_user_registrations(&user_id);
    let count = events.len();
    Json(UserRegistrationsResponse { events, count })
}
