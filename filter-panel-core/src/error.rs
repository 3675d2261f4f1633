//! Setup errors

use thiserror::Error;

use crate::event::ControlId;

/// A mismatch between the wiring and the document, detected at setup time.
///
/// These are never recoverable at runtime: the markup must be fixed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("element with id '{id}' does not exist")]
    MissingElement { id: ControlId },
    #[error("element '{id}' is a {found}, expected a {expected}")]
    WrongKind {
        id: ControlId,
        expected: &'static str,
        found: &'static str,
    },
    #[error("element id '{id}' is used more than once")]
    DuplicateId { id: ControlId },
}
