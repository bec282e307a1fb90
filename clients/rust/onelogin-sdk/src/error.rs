//! Error types for the OneLogin SDK

use thiserror::Error;

/// Result type alias for OneLogin SDK operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the OneLogin SDK
///
/// Services never wrap errors coming back from a [`Repository`](crate::repository::Repository):
/// whatever variant the repository reports is what the caller sees.
#[derive(Error, Debug)]
pub enum Error {
    /// A write payload lacks the identifiers needed to address it.
    #[error("both AppID and APIAuthID are required on the payload")]
    MissingIdentifiers,

    /// Authentication failed (401)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Authorization failed (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Remote validation error (422)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Rate limit exceeded (429)
    #[error("Rate limit exceeded: retry after {retry_after:?}")]
    RateLimited {
        retry_after: Option<std::time::Duration>,
    },

    /// Server error (5xx)
    #[error("Server error: {0}")]
    Server(String),

    /// Any other failure reported by the repository
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::RateLimited { .. } | Error::Server(_))
    }

    /// Create an error from an HTTP status code and response body
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => Error::Authentication(message),
            403 => Error::Forbidden(message),
            404 => Error::NotFound(message),
            422 => Error::Validation(message),
            429 => Error::RateLimited { retry_after: None },
            500..=599 => Error::Server(message),
            _ => Error::Transport(format!("HTTP {}: {}", status, message)),
        }
    }
}
