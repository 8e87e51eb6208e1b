//! Event endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{decode_path_param, error_response};
use crate::api::AppState;
use crate::types::{Event, EventStatus, NewEvent};

/// Query parameters for listing events
#[derive(Debug, Deserialize)]
pub struct ListEventsParams {
    /// Filter by event status
    pub status: Option<EventStatus>,
}

/// Response for event listings
#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub events: Vec<Event>,
    pub count: usize,
}

/// POST /events - Create a new event
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<NewEvent>,
) -> impl IntoResponse {
    match state.engine.create_event(draft) {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(err) => error_response(err).into_response(),
    }
}

/// GET /events - List events, optionally filtered by status
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListEventsParams>,
) -> impl IntoResponse {
    let events = state.engine.list_events(params.status);
    let count = events.len();
    Json(EventListResponse { events, count })
}

/// GET /events/:event_id - Get a single event
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> impl IntoResponse {
    let event_id = decode_path_param(&event_id);

    match state.engine.get_event(&event_id) {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(err) => error_response(err).into_response(),
    }
}
