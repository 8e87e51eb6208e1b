//! Event creation and lookup

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::types::{Event, EventStatus, NewEvent};
use crate::utils::time::current_timestamp;

use super::RegistrationEngine;

/// Create a new event with validation
///
/// Capacity and the waitlist flag are fixed for the lifetime of the event.
pub fn create_event(engine: &RegistrationEngine, draft: NewEvent) -> EngineResult<Event> {
    validate_draft(&draft)?;

    let event_id = match draft.event_id {
        Some(id) => id,
        None => Uuid::new_v4().to_string(),
    };
    let now = current_timestamp();

    let event = Event {
        event_id,
        title: draft.title,
        description: draft.description,
        date: draft.date,
        location: draft.location,
        capacity: draft.capacity,
        organizer: draft.organizer,
        status: draft.status,
        waitlist_enabled: draft.waitlist_enabled,
        created_at: now,
        updated_at: now,
    };
    engine.events.save(event.clone())?;

    info!(event_id = %event.event_id, capacity = event.capacity, "event created");
    Ok(event)
}

/// Retrieve an event by ID
pub fn get_event(engine: &RegistrationEngine, event_id: &str) -> EngineResult<Event> {
    engine
        .events
        .find_by_id(event_id)
        .ok_or_else(|| EngineError::NotFound(format!("Event with ID {} not found", event_id)))
}

/// List all events, optionally filtered by status, in creation order
pub fn list_events(engine: &RegistrationEngine, status: Option<EventStatus>) -> Vec<Event> {
    let events = engine.events.find_all();
    match status {
        Some(status) => events.into_iter().filter(|e| e.status == status).collect(),
        None => events,
    }
}

fn validate_draft(draft: &NewEvent) -> EngineResult<()> {
    if let Some(id) = &draft.event_id {
        if id.trim().is_empty() {
            return Err(EngineError::Validation("eventId cannot be empty".to_string()));
        }
    }
    if draft.title.trim().is_empty() {
        return Err(EngineError::Validation("title cannot be empty".to_string()));
    }
    if draft.description.trim().is_empty() {
        return Err(EngineError::Validation(
            "description cannot be empty".to_string(),
        ));
    }
    if draft.location.trim().is_empty() {
        return Err(EngineError::Validation("location cannot be empty".to_string()));
    }
    if draft.organizer.trim().is_empty() {
        return Err(EngineError::Validation("organizer cannot be empty".to_string()));
    }
    if draft.capacity == 0 {
        return Err(EngineError::Validation(
            "capacity must be greater than 0".to_string(),
        ));
    }
    if NaiveDate::parse_from_str(&draft.date, "%Y-%m-%d").is_err() {
        return Err(EngineError::Validation(
            "date must be in ISO format (YYYY-MM-DD)".to_string(),
        ));
    }
    Ok(())
}
