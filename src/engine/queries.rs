//! Read queries over registrations

use crate::types::{Event, Registration};

use super::RegistrationEngine;

/// Events for which the user holds an ACTIVE registration
///
/// Waitlisted entries are excluded entirely. Results follow registration
/// creation order.
pub fn get_user_registrations(engine: &RegistrationEngine, user_id: &str) -> Vec<Event> {
    engine
        .registrations
        .find_by_user(user_id)
        .into_iter()
        .filter(|r| r.is_active())
        .filter_map(|r| engine.events.find_by_id(&r.event_id))
        .collect()
}

/// All registrations for an event, both statuses
///
/// ACTIVE entries come first in registration creation order, then WAITLISTED
/// entries by position ascending. Both halves are split out of a single store
/// read so the result is one consistent snapshot.
pub fn get_event_registrations(engine: &RegistrationEngine, event_id: &str) -> Vec<Registration> {
    let registrations = engine.registrations.find_by_event(event_id);

    let (mut active, mut waitlisted): (Vec<Registration>, Vec<Registration>) =
        registrations.into_iter().partition(|r| r.is_active());
    waitlisted.sort_by_key(|r| r.waitlist_position().unwrap_or(0));

    active.extend(waitlisted);
    active
}
