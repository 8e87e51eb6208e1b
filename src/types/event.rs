//! Event configuration records

use serde::{Deserialize, Serialize};

use super::is_zero;

/// Lifecycle status of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Active,
    Scheduled,
    Ongoing,
    Completed,
    Cancelled,
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EventStatus::Active => "active",
            EventStatus::Scheduled => "scheduled",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}

/// An event with fixed capacity and waitlist configuration
///
/// Capacity and the waitlist flag are immutable once the event is created;
/// the registration engine relies on both never changing underneath it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub title: String,
    pub description: String,
    /// ISO format date (YYYY-MM-DD)
    pub date: String,
    pub location: String,
    pub capacity: u32,
    pub organizer: String,
    pub status: EventStatus,
    #[serde(rename = "waitlistEnabled", default)]
    pub waitlist_enabled: bool,
    #[serde(rename = "createdAt", default, skip_serializing_if = "is_zero")]
    pub created_at: u64,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "is_zero")]
    pub updated_at: u64,
}

/// Input for event creation; the id is generated when not supplied
#[derive(Debug, Clone, Deserialize)]
pub struct NewEvent {
    #[serde(rename = "eventId", default)]
    pub event_id: Option<String>,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub capacity: u32,
    pub organizer: String,
    pub status: EventStatus,
    #[serde(rename = "waitlistEnabled", default)]
    pub waitlist_enabled: bool,
}
