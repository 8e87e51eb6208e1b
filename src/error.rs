//! Error types shared across the registration engine

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the registration engine
///
/// Every variant carries enough context (which id, which constraint) for the
/// boundary layer to render a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed input: empty identifier, non-positive capacity, bad date
    Validation(String),
    /// Referenced user, event, or registration does not exist
    NotFound(String),
    /// Id collision on creation, or duplicate registration for a (user, event) pair
    Duplicate(String),
    /// Event is full and has no waitlist
    CapacityExceeded(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Validation(msg) => write!(f, "Validation error: {}", msg),
            EngineError::NotFound(msg) => write!(f, "Not found: {}", msg),
            EngineError::Duplicate(msg) => write!(f, "Duplicate: {}", msg),
            EngineError::CapacityExceeded(msg) => write!(f, "Capacity exceeded: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}
