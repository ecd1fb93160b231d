//! Book API client
//!
//! The reader only ever issues four GET requests: the book list, a book's
//! chapter list, a book's metadata and one chapter's content. The
//! [`BookApi`] trait abstracts those so the navigation logic can be driven
//! by the real HTTP client or by [`MockApi`] in tests.

mod error;
mod http;
mod mock;
mod types;

pub use error::{ApiError, Result};
pub use http::HttpApi;
pub use mock::MockApi;
pub use types::{
    Book, BookMetadata, Chapter, ChapterContent, DEFAULT_STATUS, NO_DESCRIPTION, NO_TAGS,
    UNKNOWN_AUTHOR, split_tags,
};

/// Read-only access to the book server
///
/// Implementations must be shareable across worker threads.
pub trait BookApi: Send + Sync {
    /// Fetch the full book list (`GET /api/books`)
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-success status or an
    /// undecodable body.
    fn books(&self) -> Result<Vec<Book>>;

    /// Fetch the ordered chapter list of a book (`GET /api/chapters/{book}`)
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-success status or an
    /// undecodable body.
    fn chapters(&self, book: &str) -> Result<Vec<Chapter>>;

    /// Fetch a book's optional metadata (`GET /api/metadata/{book}`)
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-success status or an
    /// undecodable body.
    fn metadata(&self, book: &str) -> Result<BookMetadata>;

    /// Fetch one chapter's text (`GET /api/content/{book}/{chapter}`)
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-success status or an
    /// undecodable body.
    fn content(&self, book: &str, chapter: u32) -> Result<ChapterContent>;
}
