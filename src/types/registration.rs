//! Registration records linking users to events

use serde::{Deserialize, Serialize};

/// Admission state of a registration
///
/// The waitlist position exists only on the `Waitlisted` arm, so an active
/// registration cannot carry a stale position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RegistrationState {
    Active,
    Waitlisted {
        /// 1-based position in the event's FIFO waitlist
        #[serde(rename = "waitlistPosition")]
        position: u32,
    },
}

/// A user's registration for a single event
///
/// At most one registration exists per (user, event) pair at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(rename = "registrationId")]
    pub registration_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(flatten)]
    pub state: RegistrationState,
}

impl Registration {
    /// Whether this registration counts toward the event's capacity
    pub fn is_active(&self) -> bool {
        matches!(self.state, RegistrationState::Active)
    }

    /// Waitlist position, if any
    pub fn waitlist_position(&self) -> Option<u32> {
        match self.state {
            RegistrationState::Active => None,
            RegistrationState::Waitlisted { position } => Some(position),
        }
    }
}
