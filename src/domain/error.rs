//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the team tree contract.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid team format: {message}")]
    Format { message: String },

    #[error("input ended before {prompt:?} was answered")]
    InputExhausted { prompt: String },

    #[error("invalid shuffle mode: {0} (expected none, grouped or ungrouped)")]
    InvalidMode(String),
}

impl DomainError {
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }
}
