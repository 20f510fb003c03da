//! Error types for routing.

use thiserror::Error;

/// Router-specific errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    /// No registered pattern matched the request.
    #[error("no route matched: {method} {path}")]
    NotFound { method: String, path: String },
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
