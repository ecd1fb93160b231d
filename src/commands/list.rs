//! List commands - print the book list or a book's chapters

use crate::{
    api::BookApi,
    output,
    reader::fetch_book_details,
    ReadrError,
};
use std::io::Write;

type Result<T> = std::result::Result<T, ReadrError>;

/// Print every book on the server
///
/// # Errors
/// Returns an error if the request fails or `out` cannot be written.
pub fn books(api: &dyn BookApi, out: &mut dyn Write, quiet: bool) -> Result<()> {
    let books = api.books()?;
    tracing::info!(count = books.len(), "listed books");

    if books.is_empty() {
        if !quiet {
            writeln!(out, "No books found on server.")?;
        }
    } else {
        if !quiet {
            writeln!(out, "Books:")?;
        }
        for book in &books {
            writeln!(out, "{}", output::book_line(book, quiet))?;
        }
    }
    Ok(())
}

/// Print the chapters of `book`, preceded by its details
///
/// Chapters and metadata are fetched together; missing metadata only
/// affects the header.
///
/// # Errors
/// Returns `NavError::ChaptersNotFound` if the chapter list cannot be
/// loaded, or an I/O error if `out` cannot be written.
pub fn chapters(api: &dyn BookApi, book: &str, out: &mut dyn Write, quiet: bool) -> Result<()> {
    let details = fetch_book_details(api, book)
        .map_err(|e| crate::reader::NavError::ChaptersNotFound(e.to_string()))?;

    if !quiet {
        for line in output::book_header(book, details.metadata.as_ref()) {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
        writeln!(out, "Chapters ({}):", details.chapters.len())?;
    }
    for chapter in &details.chapters {
        writeln!(out, "{}", output::chapter_line(chapter, quiet))?;
    }
    Ok(())
}
