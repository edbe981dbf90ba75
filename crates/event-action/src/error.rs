//! Error types for the event action registry.

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, EventActionError>;

/// Errors raised by the fallible registry operations.
///
/// A plain lookup miss is not an error; [`ActionRegistry::lookup`](crate::ActionRegistry::lookup)
/// returns `None` for it. These variants only surface through the hardened
/// entry points (`require`, `try_register`, `from_catalog`, parsing).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventActionError {
    /// No action is registered under the id
    #[error("unknown event action id: {0}")]
    UnknownId(i32),

    /// No action is registered under the name
    #[error("unknown event action name: {0}")]
    UnknownName(String),

    /// The id is already taken and the registry rejects duplicates
    #[error("event action id {id} already registered as '{existing}'")]
    DuplicateId { id: i32, existing: String },

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),
}

impl EventActionError {
    /// Create a new unknown id error
    pub fn unknown_id(id: i32) -> Self {
        Self::UnknownId(id)
    }

    /// Create a new unknown name error
    pub fn unknown_name(name: impl Into<String>) -> Self {
        Self::UnknownName(name.into())
    }

    /// Create a new duplicate id error
    pub fn duplicate_id(id: i32, existing: impl Into<String>) -> Self {
        Self::DuplicateId {
            id,
            existing: existing.into(),
        }
    }

    /// Create a new config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this is an unknown id or unknown name error
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::UnknownId(_) | Self::UnknownName(_))
    }

    /// Check if this is a duplicate id error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateId { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            EventActionError::unknown_id(-42).to_string(),
            "unknown event action id: -42"
        );
        assert_eq!(
            EventActionError::duplicate_id(10, "update_update").to_string(),
            "event action id 10 already registered as 'update_update'"
        );
    }

    #[test]
    fn test_error_predicates() {
        assert!(EventActionError::unknown_id(1).is_unknown());
        assert!(EventActionError::unknown_name("nope").is_unknown());
        assert!(!EventActionError::config("bad").is_unknown());
        assert!(EventActionError::duplicate_id(1, "copy").is_duplicate());
        assert!(!EventActionError::unknown_id(1).is_duplicate());
    }
}
