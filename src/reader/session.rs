//! Session state and the view enumeration
//!
//! [`SessionState`] records which book and chapter are active. It is owned by
//! the navigator and only changes through the transition methods here, which
//! enforce the chapter range invariant.

use super::error::{NavError, Result};
use std::fmt;
use std::str::FromStr;

/// The three mutually exclusive screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum View {
    /// Book list
    #[default]
    Home,
    /// Chapter list of the active book
    ChapterList,
    /// Text of the current chapter
    Reading,
}

impl View {
    /// Every view, in navigation order
    pub const ALL: [Self; 3] = [Self::Home, Self::ChapterList, Self::Reading];

    /// Short name used in configuration and logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::ChapterList => "chapters",
            Self::Reading => "read",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "chapters" => Ok(Self::ChapterList),
            "read" => Ok(Self::Reading),
            _ => Err(NavError::UnknownView(s.to_string())),
        }
    }
}

/// Enabled state of the previous/next controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Active book and chapter pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    active_book: String,
    current_chapter: u32,
    total_chapters: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            active_book: String::new(),
            current_chapter: 1,
            total_chapters: 0,
        }
    }
}

impl SessionState {
    /// Create an empty session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Active book, empty when none is selected
    #[must_use]
    pub fn active_book(&self) -> &str {
        &self.active_book
    }

    /// Whether a book is selected
    #[must_use]
    pub fn has_active_book(&self) -> bool {
        !self.active_book.is_empty()
    }

    /// Current chapter number (always >= 1)
    #[must_use]
    pub const fn current_chapter(&self) -> u32 {
        self.current_chapter
    }

    /// Number of chapters in the loaded chapter list
    #[must_use]
    pub const fn total_chapters(&self) -> u32 {
        self.total_chapters
    }

    /// Select a book; the chapter pointer is left alone until its chapters load
    pub fn select_book(&mut self, book: &str) {
        book.clone_into(&mut self.active_book);
    }

    /// Record a freshly loaded chapter list and rewind to chapter 1
    pub const fn set_total_chapters(&mut self, total: u32) {
        self.total_chapters = total;
        self.current_chapter = 1;
    }

    /// Move the chapter pointer
    ///
    /// # Errors
    ///
    /// Returns `NavError::ChapterOutOfRange` unless `1 <= chapter <= total`.
    pub fn set_current_chapter(&mut self, chapter: u32) -> Result<()> {
        if chapter == 0 || chapter > self.total_chapters {
            return Err(NavError::ChapterOutOfRange {
                chapter,
                total: self.total_chapters,
            });
        }
        self.current_chapter = chapter;
        Ok(())
    }

    /// Whether a previous chapter exists
    #[must_use]
    pub const fn can_go_prev(&self) -> bool {
        self.current_chapter > 1
    }

    /// Whether a next chapter exists
    #[must_use]
    pub const fn can_go_next(&self) -> bool {
        self.current_chapter < self.total_chapters
    }

    /// Current pagination guards
    #[must_use]
    pub const fn pagination(&self) -> Pagination {
        Pagination {
            prev_enabled: self.can_go_prev(),
            next_enabled: self.can_go_next(),
        }
    }
}
