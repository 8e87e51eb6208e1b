//! User creation and lookup

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::types::User;

use super::RegistrationEngine;

/// Create a new user with validation
pub fn create_user(engine: &RegistrationEngine, user_id: &str, name: &str) -> EngineResult<User> {
    if user_id.trim().is_empty() {
        return Err(EngineError::Validation("userId cannot be empty".to_string()));
    }
    if name.trim().is_empty() {
        return Err(EngineError::Validation("name cannot be empty".to_string()));
    }

    let user = User::new(user_id.to_string(), name.to_string());
    engine.users.save(user.clone())?;

    info!(user_id, "user created");
    Ok(user)
}

/// Retrieve a user by ID
pub fn get_user(engine: &RegistrationEngine, user_id: &str) -> Option<User> {
    engine.users.find_by_id(user_id)
}
