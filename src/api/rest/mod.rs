//! REST handler modules
//!
//! Routes mirror the engine's operations one to one:
//! - `POST /users`, `GET /users/:user_id`
//! - `POST /events`, `GET /events`, `GET /events/:event_id`
//! - `POST /events/:event_id/registrations` - register (201)
//! - `DELETE /events/:event_id/registrations/:user_id` - unregister (204)
//! - `GET /events/:event_id/registrations` - all registrations for an event
//! - `GET /users/:user_id/registrations` - active events for a user

pub mod events;
pub mod registrations;
pub mod users;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::EngineError;

/// API error response body
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

/// Map an engine error to a transport status and error body
pub fn error_response(err: EngineError) -> (StatusCode, Json<ApiError>) {
    let (status, code) = match &err {
        EngineError::Validation(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        EngineError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        EngineError::Duplicate(_) => (StatusCode::CONFLICT, "DUPLICATE"),
        EngineError::CapacityExceeded(_) => (StatusCode::CONFLICT, "CAPACITY_EXCEEDED"),
    };

    let body = ApiError {
        error: err.to_string(),
        code: code.to_string(),
    };
    (status, Json(body))
}

/// Decode a percent-encoded path parameter (handles spaces and special chars)
pub(crate) fn decode_path_param(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}
