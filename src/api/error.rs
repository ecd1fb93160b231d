//! API client error types
//!
//! Transport failures and non-success HTTP statuses are kept apart here for
//! diagnostics, but callers treat every variant as the same failure path.

use thiserror::Error;

/// Errors that can occur while talking to the book server
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the body could not be read
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("Request failed with status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, kept for logging
        body: String,
    },

    /// The response body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured server URL cannot be used as a base URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
