//! Error types for the view engine and the host boundary.

use thiserror::Error;

/// Failure reported by the host data service.
///
/// The engine treats these as opaque: they are logged and surfaced as a
/// non-fatal warning, and the view keeps its last-good state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("host operation failed: {message}")]
pub struct HostError {
    pub message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Entry-name validation failure.
///
/// Validation stops at the first violation, so at most one of these is
/// produced per candidate name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name is longer than 255 characters ({len})")]
    TooLong { len: usize },
    #[error("protected directory name: {0}")]
    Reserved(String),
    #[error("name contains forbidden character {character:?} at position {position}")]
    ForbiddenCharacter { character: char, position: usize },
}

/// A malformed record inside a snapshot push.
///
/// These are diagnostics only: the offending record is dropped and the
/// rest of the snapshot is still applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("node {id:?} references unknown parent {parent:?}")]
    UnknownParent { id: String, parent: String },
    #[error("duplicate node id {id:?}")]
    DuplicateId { id: String },
}
