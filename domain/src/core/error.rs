//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("A request is already in flight")]
    RequestInFlight,
}

impl DomainError {
    /// Check if this error was raised by the single-flight guard
    pub fn is_in_flight(&self) -> bool {
        matches!(self, DomainError::RequestInFlight)
    }
}
