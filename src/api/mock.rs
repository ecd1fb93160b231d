//! Mock book API for testing

use super::error::{ApiError, Result};
use super::types::{Book, BookMetadata, Chapter, ChapterContent};
use super::BookApi;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory [`BookApi`] that serves scripted responses
///
/// Anything not scripted answers like a server 404. Every call is recorded
/// so tests can assert on the requests that were made.
#[derive(Debug, Default)]
pub struct MockApi {
    books: Option<Vec<Book>>,
    chapters: HashMap<String, Vec<Chapter>>,
    metadata: HashMap<String, BookMetadata>,
    content: HashMap<(String, u32), ChapterContent>,
    calls: Mutex<Vec<String>>,
}

impl MockApi {
    /// Create an empty mock where every endpoint fails
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve this book list from `books()`
    #[must_use]
    pub fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = Some(books);
        self
    }

    /// Serve this chapter list for `book`
    #[must_use]
    pub fn with_chapters(mut self, book: &str, chapters: Vec<Chapter>) -> Self {
        self.chapters.insert(book.to_string(), chapters);
        self
    }

    /// Serve this metadata for `book`
    #[must_use]
    pub fn with_metadata(mut self, book: &str, metadata: BookMetadata) -> Self {
        self.metadata.insert(book.to_string(), metadata);
        self
    }

    /// Serve this content for chapter `chapter` of `book`
    #[must_use]
    pub fn with_content(mut self, book: &str, chapter: u32, title: &str, content: &str) -> Self {
        self.content.insert(
            (book.to_string(), chapter),
            ChapterContent {
                title: title.to_string(),
                content: content.to_string(),
            },
        );
        self
    }

    /// Add a book with `count` generated chapters, all with content
    ///
    /// Chapter `n` is titled `"Chapter n"` and its body is `"{book} text n"`.
    #[must_use]
    pub fn with_generated_book(mut self, book: &str, count: u32) -> Self {
        self.books
            .get_or_insert_with(Vec::new)
            .push(Book::new(book, None));
        let chapters = (1..=count)
            .map(|n| Chapter::new(n, format!("Chapter {n}")))
            .collect();
        self = self.with_chapters(book, chapters);
        for n in 1..=count {
            self = self.with_content(book, n, &format!("Chapter {n}"), &format!("{book} text {n}"));
        }
        self
    }

    /// Requests made so far, formatted like `"chapters:Book"`
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn not_found(what: &str) -> ApiError {
        ApiError::Status {
            status: 404,
            body: format!("{what} not found"),
        }
    }
}

impl BookApi for MockApi {
    fn books(&self) -> Result<Vec<Book>> {
        self.record("books".to_string());
        self.books.clone().ok_or_else(|| Self::not_found("books"))
    }

    fn chapters(&self, book: &str) -> Result<Vec<Chapter>> {
        self.record(format!("chapters:{book}"));
        self.chapters
            .get(book)
            .cloned()
            .ok_or_else(|| Self::not_found("Chapters"))
    }

    fn metadata(&self, book: &str) -> Result<BookMetadata> {
        self.record(format!("metadata:{book}"));
        self.metadata
            .get(book)
            .cloned()
            .ok_or_else(|| Self::not_found("Metadata"))
    }

    fn content(&self, book: &str, chapter: u32) -> Result<ChapterContent> {
        self.record(format!("content:{book}:{chapter}"));
        self.content
            .get(&(book.to_string(), chapter))
            .cloned()
            .ok_or_else(|| Self::not_found("Content"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mock_fails_everything() {
        let api = MockApi::new();
        assert!(api.books().is_err());
        assert!(api.chapters("x").is_err());
        assert!(api.metadata("x").is_err());
        assert!(api.content("x", 1).is_err());
        assert_eq!(api.calls().len(), 4);
    }

    #[test]
    fn test_generated_book() {
        let api = MockApi::new().with_generated_book("Dune", 3);

        assert_eq!(api.books().unwrap(), vec![Book::new("Dune", None)]);
        assert_eq!(api.chapters("Dune").unwrap().len(), 3);
        assert_eq!(api.content("Dune", 2).unwrap().content, "Dune text 2");
        assert!(api.content("Dune", 4).is_err());
    }

    #[test]
    fn test_calls_are_recorded_in_order() {
        let api = MockApi::new().with_generated_book("Dune", 1);
        let _ = api.chapters("Dune");
        let _ = api.metadata("Dune");
        let _ = api.content("Dune", 1);

        assert_eq!(
            api.calls(),
            vec!["chapters:Dune", "metadata:Dune", "content:Dune:1"]
        );
    }
}
