//! Router error types

use thiserror::Error;

/// Errors raised while building a route table or moving through history
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Pattern syntax is invalid
    #[error("Invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The same pattern was registered twice
    #[error("Duplicate route pattern: {0}")]
    DuplicatePattern(String),

    /// A parameter needed to build a path was not supplied
    #[error("Missing route parameter: {0}")]
    MissingParam(String),

    /// Back or forward was requested past the end of the history
    #[error("No history entry to go {0}")]
    NoHistory(&'static str),
}

impl RouteError {
    pub(crate) fn invalid(pattern: &str, reason: impl Into<String>) -> Self {
        RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for router operations
pub type RouteResult<T> = Result<T, RouteError>;
