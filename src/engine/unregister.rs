//! Unregistration with waitlist promotion

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::types::{Registration, RegistrationState};

use super::RegistrationEngine;

/// Unregister a user from an event
///
/// Removing an ACTIVE registration promotes the head of the waitlist, if any.
/// Remaining waitlist positions are renumbered to stay contiguous from 1.
/// The removal, the promotion, and the renumbering reach the store as one
/// atomic batch, so readers never see the sequence half-applied.
pub fn unregister_user(
    engine: &RegistrationEngine,
    user_id: &str,
    event_id: &str,
) -> EngineResult<()> {
    if user_id.trim().is_empty() {
        return Err(EngineError::Validation("userId cannot be empty".to_string()));
    }
    if event_id.trim().is_empty() {
        return Err(EngineError::Validation("eventId cannot be empty".to_string()));
    }

    let lock = engine.event_lock(event_id);
    let _guard = lock.lock();

    let existing = engine
        .registrations
        .find_by_user_and_event(user_id, event_id)
        .ok_or_else(|| {
            EngineError::NotFound(format!(
                "Registration not found for user {} and event {}",
                user_id, event_id
            ))
        })?;
    let was_active = existing.is_active();

    // Waitlist without the departing entry, still in position order
    let mut waitlist: Vec<Registration> = engine
        .registrations
        .waitlist_for_event(event_id)
        .into_iter()
        .filter(|r| r.user_id != user_id)
        .collect();

    let mut updates = Vec::new();
    let mut promoted = None;

    if was_active && !waitlist.is_empty() {
        // Promote the FIFO head into the freed slot
        let mut head = waitlist.remove(0);
        head.state = RegistrationState::Active;
        promoted = Some(head.user_id.clone());
        updates.push(head);
    }

    // Renumber what remains so positions are contiguous from 1
    for (idx, mut reg) in waitlist.into_iter().enumerate() {
        let position = idx as u32 + 1;
        if reg.waitlist_position() != Some(position) {
            reg.state = RegistrationState::Waitlisted { position };
            updates.push(reg);
        }
    }

    engine
        .registrations
        .apply_batch(Some((user_id, event_id)), updates);

    info!(user_id, event_id, promoted = promoted.as_deref(), "user unregistered");
    Ok(())
}
