//! Storage contracts consumed by the registration engine
//!
//! The stores hold data and enforce nothing: all business rules live in the
//! engine. The contracts are traits so a persistent backend can be substituted
//! without touching engine logic; the in-memory implementations in `memory`
//! are the initial backend.

mod memory;

pub use memory::{InMemoryEventStore, InMemoryRegistrationStore, InMemoryUserStore};

use crate::error::EngineResult;
use crate::types::{Event, Registration, User};

/// Identity store: write-once user records
pub trait UserStore: Send + Sync {
    fn exists(&self, user_id: &str) -> bool;
    fn find_by_id(&self, user_id: &str) -> Option<User>;
    /// Persist a new user; fails Duplicate if the id is already present
    fn save(&self, user: User) -> EngineResult<()>;
}

/// Event store: write-once event configuration records
pub trait EventStore: Send + Sync {
    fn exists(&self, event_id: &str) -> bool;
    fn find_by_id(&self, event_id: &str) -> Option<Event>;
    fn find_all(&self) -> Vec<Event>;
    /// Persist a new event; fails Duplicate if the id is already present
    fn save(&self, event: Event) -> EngineResult<()>;
}

/// Registration store: one record per (user, event) pair
///
/// Mutations driven by the engine arrive either as a single `save` or as a
/// single `apply_batch`, each of which must be atomic with respect to the
/// read methods so readers never observe a half-applied operation.
pub trait RegistrationStore: Send + Sync {
    /// Insert or replace the record for (user, event)
    fn save(&self, registration: Registration);
    /// Remove the record for (user, event); returns the removed record
    fn delete(&self, user_id: &str, event_id: &str) -> Option<Registration>;
    fn find_by_user_and_event(&self, user_id: &str, event_id: &str) -> Option<Registration>;
    /// All registrations for a user, in creation order
    fn find_by_user(&self, user_id: &str) -> Vec<Registration>;
    /// All registrations for an event, in creation order
    fn find_by_event(&self, event_id: &str) -> Vec<Registration>;
    /// Number of ACTIVE registrations for an event
    fn count_active_by_event(&self, event_id: &str) -> usize;
    /// Waitlisted registrations for an event, ordered by position ascending
    fn waitlist_for_event(&self, event_id: &str) -> Vec<Registration>;
    /// Atomically remove one record and replace the given records in place
    ///
    /// The engine uses this to apply an unregister's full write set (removal,
    /// promotion, renumbering) as one mutation.
    fn apply_batch(&self, removal: Option<(&str, &str)>, updates: Vec<Registration>);
}
