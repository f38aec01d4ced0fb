//! Typed errors for the task core.
//!
//! Only genuine failures live here. Blank input and unknown ids are not
//! errors: the store simply reports that nothing changed.

use thiserror::Error;

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Errors raised while reading or writing the persisted task list.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The blob store could not be read or written.
    #[error("storage error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored blob exists but is not a valid task list.
    #[error("stored data under key '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The task list could not be encoded.
    #[error("failed to encode task list: {0}")]
    Encode(#[source] serde_json::Error),
}

impl PersistenceError {
    pub fn io(key: &str, source: std::io::Error) -> Self {
        Self::Io {
            key: key.to_string(),
            source,
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}

/// Error returned when a priority, filter or sort spelling is unknown.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct ParseModeError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseModeError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
