//! Access Layer Errors
//!
//! A single "request failed" kind. Network failures, 4xx, 5xx and undecodable
//! bodies all collapse into one message-bearing error.

use thiserror::Error;

/// Result type for every access-layer call
pub type ApiResult<T> = Result<T, ApiError>;

/// Request failure carrying the human-readable message shown on the page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Error for a non-2xx response: the body text, or a templated fallback
    /// when the body is empty.
    pub fn from_status(status: u16, body: &str) -> Self {
        if body.is_empty() {
            Self::new(format!("Request failed with status {}", status))
        } else {
            Self::new(body)
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
