//! Routing error types.

use thiserror::Error;

/// Errors produced while registering routes.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The pattern cannot be turned into a matcher.
    #[error("Invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl RouterError {
    pub(crate) fn invalid_pattern(pattern: impl Into<String>, reason: impl ToString) -> Self {
        RouterError::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }
}
