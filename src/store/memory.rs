//! In-memory store implementations
//!
//! Rows live in insertion-ordered vectors behind a `parking_lot` RwLock, so
//! iteration order is creation order and every trait method is a single guard
//! acquisition.

use parking_lot::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::types::{Event, Registration, User};

use super::{EventStore, RegistrationStore, UserStore};

/// In-memory user store
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn exists(&self, user_id: &str) -> bool {
        self.users.read().iter().any(|u| u.user_id == user_id)
    }

    fn find_by_id(&self, user_id: &str) -> Option<User> {
        self.users.read().iter().find(|u| u.user_id == user_id).cloned()
    }

    fn save(&self, user: User) -> EngineResult<()> {
        // Duplicate check and insert under one write guard
        let mut users = self.users.write();
        if users.iter().any(|u| u.user_id == user.user_id) {
            return Err(EngineError::Duplicate(format!(
                "User with ID {} already exists",
                user.user_id
            )));
        }
        users.push(user);
        Ok(())
    }
}

/// In-memory event store
#[derive(Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<Event>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventStore for InMemoryEventStore {
    fn exists(&self, event_id: &str) -> bool {
        self.events.read().iter().any(|e| e.event_id == event_id)
    }

    fn find_by_id(&self, event_id: &str) -> Option<Event> {
        self.events.read().iter().find(|e| e.event_id == event_id).cloned()
    }

    fn find_all(&self) -> Vec<Event> {
        self.events.read().clone()
    }

    fn save(&self, event: Event) -> EngineResult<()> {
        let mut events = self.events.write();
        if events.iter().any(|e| e.event_id == event.event_id) {
            return Err(EngineError::Duplicate(format!(
                "Event with ID {} already exists",
                event.event_id
            )));
        }
        events.push(event);
        Ok(())
    }
}

/// In-memory registration store
#[derive(Default)]
pub struct InMemoryRegistrationStore {
    registrations: RwLock<Vec<Registration>>,
}

impl InMemoryRegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegistrationStore for InMemoryRegistrationStore {
    fn save(&self, registration: Registration) {
        let mut regs = self.registrations.write();
        match regs
            .iter_mut()
            .find(|r| r.user_id == registration.user_id && r.event_id == registration.event_id)
        {
            Some(existing) => *existing = registration,
            None => regs.push(registration),
        }
    }

    fn delete(&self, user_id: &str, event_id: &str) -> Option<Registration> {
        let mut regs = self.registrations.write();
        let idx = regs
            .iter()
            .position(|r| r.user_id == user_id && r.event_id == event_id)?;
        Some(regs.remove(idx))
    }

    fn find_by_user_and_event(&self, user_id: &str, event_id: &str) -> Option<Registration> {
        self.registrations
            .read()
            .iter()
            .find(|r| r.user_id == user_id && r.event_id == event_id)
            .cloned()
    }

    fn find_by_user(&self, user_id: &str) -> Vec<Registration> {
        self.registrations
            .read()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }

    fn find_by_event(&self, event_id: &str) -> Vec<Registration> {
        self.registrations
            .read()
            .iter()
            .filter(|r| r.event_id == event_id)
            .cloned()
            .collect()
    }

    fn count_active_by_event(&self, event_id: &str) -> usize {
        self.registrations
            .read()
            .iter()
            .filter(|r| r.event_id == event_id && r.is_active())
            .count()
    }

    fn waitlist_for_event(&self, event_id: &str) -> Vec<Registration> {
        let mut waitlisted: Vec<Registration> = self
            .registrations
            .read()
            .iter()
            .filter(|r| r.event_id == event_id && !r.is_active())
            .cloned()
            .collect();
        waitlisted.sort_by_key(|r| r.waitlist_position().unwrap_or(0));
        waitlisted
    }

    fn apply_batch(&self, removal: Option<(&str, &str)>, updates: Vec<Registration>) {
        // One write guard for the whole batch: readers see all of it or none
        let mut regs = self.registrations.write();

        if let Some((user_id, event_id)) = removal {
            regs.retain(|r| !(r.user_id == user_id && r.event_id == event_id));
        }

        for update in updates {
            match regs
                .iter_mut()
                .find(|r| r.user_id == update.user_id && r.event_id == update.event_id)
            {
                Some(existing) => *existing = update,
                None => regs.push(update),
            }
        }
    }
}
