//! Wire types for the book API
//!
//! These mirror the JSON payloads returned by the server. Every type is
//! read-only from the client's point of view.

use serde::{Deserialize, Serialize};

/// Placeholder shown when the metadata carries no author
pub const UNKNOWN_AUTHOR: &str = "unknown author";
/// Placeholder shown when the metadata carries no status
pub const DEFAULT_STATUS: &str = "ongoing";
/// Placeholder shown when the metadata carries no description
pub const NO_DESCRIPTION: &str = "no description";
/// Placeholder badge shown when a book has no tags
pub const NO_TAGS: &str = "none";

/// A book entry as listed by `GET /api/books`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Book identifier, also used as its display name
    pub book_name: String,
    /// Author, when the server knows it
    #[serde(default)]
    pub author: Option<String>,
}

impl Book {
    /// Create a new book entry
    #[must_use]
    pub fn new(book_name: impl Into<String>, author: Option<String>) -> Self {
        Self {
            book_name: book_name.into(),
            author,
        }
    }
}

/// A chapter entry as listed by `GET /api/chapters/{book}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// 1-based chapter number, defines ordering
    pub chapter_num: u32,
    /// Chapter title
    pub title: String,
}

impl Chapter {
    /// Create a new chapter entry
    #[must_use]
    pub fn new(chapter_num: u32, title: impl Into<String>) -> Self {
        Self {
            chapter_num,
            title: title.into(),
        }
    }
}

/// Chapter text as returned by `GET /api/content/{book}/{n}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterContent {
    pub title: String,
    pub content: String,
}

/// Optional book details from `GET /api/metadata/{book}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMetadata {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Comma-separated tag list
    #[serde(default)]
    pub tags: Option<String>,
}

impl BookMetadata {
    /// Author or the "unknown author" placeholder
    #[must_use]
    pub fn author_or_placeholder(&self) -> &str {
        non_blank(self.author.as_deref()).unwrap_or(UNKNOWN_AUTHOR)
    }

    /// Status or the "ongoing" placeholder
    #[must_use]
    pub fn status_or_placeholder(&self) -> &str {
        non_blank(self.status.as_deref()).unwrap_or(DEFAULT_STATUS)
    }

    /// Description or the "no description" placeholder
    #[must_use]
    pub fn description_or_placeholder(&self) -> &str {
        non_blank(self.description.as_deref()).unwrap_or(NO_DESCRIPTION)
    }

    /// Tag badges to display
    ///
    /// Returns a single `"none"` badge when the book has no tags.
    #[must_use]
    pub fn tag_badges(&self) -> Vec<String> {
        let tags = self.tags.as_deref().map(split_tags).unwrap_or_default();
        if tags.is_empty() {
            vec![NO_TAGS.to_string()]
        } else {
            tags
        }
    }
}

/// Split a comma-separated tag string into trimmed, non-empty tags
///
/// # Examples
/// ```
/// use readr::api::split_tags;
///
/// assert_eq!(split_tags("a, b ,c"), vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
