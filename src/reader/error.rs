//! Navigation error types

use crate::prefs::PrefsError;
use thiserror::Error;

/// Errors raised by the navigation controller
#[derive(Debug, Error)]
pub enum NavError {
    /// A view name that is not one of home, chapters or read
    #[error("Unknown view '{0}'. Expected one of: home, chapters, read")]
    UnknownView(String),

    /// A chapter number outside `1..=total`
    #[error("Chapter {chapter} is out of range (book has {total} chapters)")]
    ChapterOutOfRange {
        /// Requested chapter
        chapter: u32,
        /// Chapters in the active book
        total: u32,
    },

    /// Content was requested before any book was selected
    #[error("No book selected")]
    NoActiveBook,

    /// The chapter list of the selected book could not be loaded
    #[error("Chapters not found: {0}")]
    ChaptersNotFound(String),

    /// The theme preference could not be persisted
    #[error("Failed to save theme preference: {0}")]
    Preferences(#[from] PrefsError),
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavError>;
