//! Admission decision for registration requests

use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::types::{Registration, RegistrationState};

use super::RegistrationEngine;

/// Register a user for an event
///
/// Returns an ACTIVE registration while capacity remains, a WAITLISTED one
/// when the event is full and has a waitlist, and fails CapacityExceeded
/// otherwise. Exactly one record is persisted on success, none on failure.
pub fn register_user(
    engine: &RegistrationEngine,
    user_id: &str,
    event_id: &str,
) -> EngineResult<Registration> {
    if user_id.trim().is_empty() {
        return Err(EngineError::Validation("userId cannot be empty".to_string()));
    }
    if event_id.trim().is_empty() {
        return Err(EngineError::Validation("eventId cannot be empty".to_string()));
    }

    if !engine.users.exists(user_id) {
        return Err(EngineError::NotFound(format!("User {} not found", user_id)));
    }
    let event = engine
        .events
        .find_by_id(event_id)
        .ok_or_else(|| EngineError::NotFound(format!("Event {} not found", event_id)))?;

    // Serialize the check-then-act sequence per event: the duplicate check,
    // the capacity read, and the waitlist tail read must not interleave with
    // another writer for the same event.
    let lock = engine.event_lock(event_id);
    let _guard = lock.lock();

    if engine
        .registrations
        .find_by_user_and_event(user_id, event_id)
        .is_some()
    {
        return Err(EngineError::Duplicate(format!(
            "User {} is already registered for event {}",
            user_id, event_id
        )));
    }

    let active_count = engine.registrations.count_active_by_event(event_id);

    let state = if active_count < event.capacity as usize {
        RegistrationState::Active
    } else if event.waitlist_enabled {
        let next_position = engine
            .registrations
            .waitlist_for_event(event_id)
            .last()
            .and_then(|r| r.waitlist_position())
            .unwrap_or(0)
            + 1;
        RegistrationState::Waitlisted {
            position: next_position,
        }
    } else {
        return Err(EngineError::CapacityExceeded(format!(
            "Event {} is at full capacity",
            event_id
        )));
    };

    let registration = Registration {
        registration_id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        event_id: event_id.to_string(),
        state,
    };
    engine.registrations.save(registration.clone());

    info!(
        user_id,
        event_id,
        waitlisted = !registration.is_active(),
        "user registered"
    );
    Ok(registration)
}
