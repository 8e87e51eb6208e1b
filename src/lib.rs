//! Events API
//!
//! An event registration service with capacity-bounded admission and FIFO
//! waitlists.
//!
//! # Features
//!
//! - **Admission control**: each registration lands in an active slot or on
//!   an ordered waitlist, never past the event's capacity
//! - **FIFO promotion**: freeing an active slot promotes the head of the
//!   waitlist; remaining positions stay contiguous from 1
//! - **Per-event serialization**: concurrent writes to the same event are
//!   serialized, different events proceed in parallel
//! - **Pluggable storage**: stores are trait contracts with in-memory
//!   implementations as the initial backend
//!
//! # Modules
//!
//! - `types`: Core data structures (User, Event, Registration)
//! - `error`: Engine error kinds and result alias
//! - `store`: Store contracts and in-memory backends
//! - `engine`: The registration engine with all business rules
//! - `api`: Axum HTTP boundary
//! - `config`: Server configuration from the environment
//! - `utils`: Timestamp helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use events_api::engine::RegistrationEngine;
//! use events_api::store::{InMemoryEventStore, InMemoryRegistrationStore, InMemoryUserStore};
//! use events_api::types::{EventStatus, NewEvent};
//!
//! let engine = RegistrationEngine::new(
//!     Arc::new(InMemoryUserStore::new()),
//!     Arc::new(InMemoryEventStore::new()),
//!     Arc::new(InMemoryRegistrationStore::new()),
//! );
//!
//! engine.create_user("alice", "Alice").unwrap();
//! let event = engine
//!     .create_event(NewEvent {
//!         event_id: Some("rustconf".to_string()),
//!         title: "RustConf".to_string(),
//!         description: "Annual conference".to_string(),
//!         date: "2026-09-10".to_string(),
//!         location: "Portland".to_string(),
//!         capacity: 2,
//!         organizer: "Rust Foundation".to_string(),
//!         status: EventStatus::Scheduled,
//!         waitlist_enabled: true,
//!     })
//!     .unwrap();
//!
//! let registration = engine.register_user("alice", &event.event_id).unwrap();
//! assert!(registration.is_active());
//! ```

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::ServerConfig;
pub use engine::RegistrationEngine;
pub use error::{EngineError, EngineResult};
pub use store::{
    EventStore, InMemoryEventStore, InMemoryRegistrationStore, InMemoryUserStore,
    RegistrationStore, UserStore,
};
pub use types::{Event, EventStatus, NewEvent, Registration, RegistrationState, User};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
