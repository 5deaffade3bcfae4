//! Error types.
//!
//! Accessors and builders fail with [`EventError`]; loading an
//! [`EventScript`](crate::fixture::EventScript) fails with [`FixtureError`].

use crate::event::EventType;
use std::fmt;
use thiserror::Error;

/// Which indexed sequence an out-of-range index was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    /// Pointer slot within a motion event.
    Pointer,
    /// Historical sample within a motion event.
    History,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Pointer => f.write_str("pointer"),
            IndexKind::History => f.write_str("history"),
        }
    }
}

/// Failure reading or constructing an event.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EventError {
    /// A variant-specific accessor was called on the other variant.
    #[error("expected a {expected} event, got a {actual} event")]
    WrongVariant {
        expected: EventType,
        actual: EventType,
    },

    /// Pointer or history index is `>=` the number of entries.
    #[error("{kind} index {index} out of range (count {count})")]
    IndexOutOfRange {
        kind: IndexKind,
        index: usize,
        count: usize,
    },

    /// A raw integer does not name any value of a frozen enum.
    #[error("unknown {what} value {value}")]
    UnknownValue { what: &'static str, value: i32 },

    /// The builder was asked to produce an event that breaks an invariant.
    #[error("invalid event: {0}")]
    Invalid(String),
}

pub type Result<T, E = EventError> = std::result::Result<T, E>;

/// Failure loading or building an event script.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed TOML fixture: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("malformed JSON fixture: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode TOML fixture: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    /// File extension is neither `.toml` nor `.json`.
    #[error("unsupported fixture format: {0:?}")]
    UnsupportedFormat(Option<String>),

    /// Record `index` in the script failed validation.
    #[error("event #{index}: {source}")]
    Event {
        index: usize,
        #[source]
        source: EventError,
    },
}
