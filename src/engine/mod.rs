//! Registration engine - core business rules
//!
//! This module contains the admission-control engine: registration,
//! unregistration with FIFO waitlist promotion, and the read queries, together
//! with user and event creation. The stores hold data; every rule is enforced
//! here.
//!
//! Writes for a given event are serialized through a per-event mutex, so two
//! concurrent registrations can never both observe a free slot when only one
//! remains. Operations on different events proceed in parallel.

mod events;
mod queries;
mod register;
mod unregister;
mod users;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::EngineResult;
use crate::store::{EventStore, RegistrationStore, UserStore};
use crate::types::{Event, EventStatus, NewEvent, Registration, User};

/// Admission-control engine over the three stores
///
/// Owns all writes to the registration store; nothing else creates, mutates,
/// or deletes registrations.
pub struct RegistrationEngine {
    pub(crate) users: Arc<dyn UserStore>,
    pub(crate) events: Arc<dyn EventStore>,
    pub(crate) registrations: Arc<dyn RegistrationStore>,
    /// One mutex per event id, created on first use
    event_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl RegistrationEngine {
    /// Create an engine over the given store instances
    pub fn new(
        users: Arc<dyn UserStore>,
        events: Arc<dyn EventStore>,
        registrations: Arc<dyn RegistrationStore>,
    ) -> Self {
        Self {
            users,
            events,
            registrations,
            event_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch (or create) the serialization mutex for an event
    ///
    /// The returned Arc outlives the registry guard, so callers lock the
    /// event without holding the registry lock.
    pub(crate) fn event_lock(&self, event_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.event_locks.lock();
        locks
            .entry(event_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

impl RegistrationEngine {
    // User operations (from users.rs)
    pub fn create_user(&self, user_id: &str, name: &str) -> EngineResult<User> {
        users::create_user(self, user_id, name)
    }

    pub fn get_user(&self, user_id: &str) -> Option<User> {
        users::get_user(self, user_id)
    }

    // Event operations (from events.rs)
    pub fn create_event(&self, draft: NewEvent) -> EngineResult<Event> {
        events::create_event(self, draft)
    }

    pub fn get_event(&self, event_id: &str) -> EngineResult<Event> {
        events::get_event(self, event_id)
    }

    pub fn list_events(&self, status: Option<EventStatus>) -> Vec<Event> {
        events::list_events(self, status)
    }

    // Registration operations (from register.rs / unregister.rs)
    pub fn register_user(&self, user_id: &str, event_id: &str) -> EngineResult<Registration> {
        register::register_user(self, user_id, event_id)
    }

    pub fn unregister_user(&self, user_id: &str, event_id: &str) -> EngineResult<()> {
        unregister::unregister_user(self, user_id, event_id)
    }

    // Query operations (from queries.rs)
    pub fn get_user_registrations(&self, user_id: &str) -> Vec<Event> {
        queries::get_user_registrations(self, user_id)
    }

    pub fn get_event_registrations(&self, event_id: &str) -> Vec<Registration> {
        queries::get_event_registrations(self, event_id)
    }
}
