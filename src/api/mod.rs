//! HTTP API layer

pub mod http;
pub mod rest;

use std::sync::Arc;

use crate::engine::RegistrationEngine;

/// Shared application state for HTTP handlers
pub struct AppState {
    /// The registration engine
    pub engine: Arc<RegistrationEngine>,
}

impl AppState {
    /// Create a new AppState around the given engine
    pub fn new(engine: Arc<RegistrationEngine>) -> Self {
        Self { engine }
    }
}
