//! User identity record

use serde::{Deserialize, Serialize};

/// A registered user identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
}

impl User {
    /// Create a new user record
    pub fn new(user_id: String, name: String) -> Self {
        Self { user_id, name }
    }
}
