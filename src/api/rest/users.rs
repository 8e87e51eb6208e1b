//! User endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{decode_path_param, error_response, ApiError};
use crate::api::AppState;

/// Request body for user creation
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
}

/// POST /users - Create a new user
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateUserRequest>,
) -> impl IntoResponse {
    match state.engine.create_user(&request.user_id, &request.name) {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(err) => error_response(err).into_response(),
    }
}

/// GET /users/:user_id - Get a user by ID
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    let user_id = decode_path_param(&user_id);

    match state.engine.get_user(&user_id) {
        Some(user) => (StatusCode::OK, Json(user)).into_response(),
        None => {
            let error = ApiError {
                error: format!("User {} not found", user_id),
                code: "NOT_FOUND".to_string(),
            };
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}
