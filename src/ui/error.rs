//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal setup, drawing or event polling failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The reader could not be started
    #[error("Failed to start reader: {0}")]
    StartError(String),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
