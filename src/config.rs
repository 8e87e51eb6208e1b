//! Server configuration from environment variables

use std::env;

/// Listen address configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read configuration from `EVENTS_HOST` / `EVENTS_PORT`, with defaults
    pub fn from_env() -> Self {
        let host = env::var("EVENTS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("EVENTS_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Self { host, port }
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
