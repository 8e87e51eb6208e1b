//! Events API - Binary Entry Point
//!
//! This is the main entry point for the events-server binary.

use std::sync::Arc;

use tracing::info;

use events_api::api::http::create_router;
use events_api::api::AppState;
use events_api::engine::RegistrationEngine;
use events_api::store::{InMemoryEventStore, InMemoryRegistrationStore, InMemoryUserStore};
use events_api::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();

    let engine = Arc::new(RegistrationEngine::new(
        Arc::new(InMemoryUserStore::new()),
        Arc::new(InMemoryEventStore::new()),
        Arc::new(InMemoryRegistrationStore::new()),
    ));

    let state = Arc::new(AppState::new(engine));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "events-server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
