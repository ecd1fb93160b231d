//! Testing utilities for readr
//!
//! Fixtures shared by the unit tests. Only available when compiled with
//! `cfg(test)`.

use crate::api::{Book, BookMetadata, Chapter, MockApi};

/// A small library: "Dune" with 5 chapters and metadata, "Emma" with 2
/// chapters and none
#[must_use]
pub fn sample_library() -> MockApi {
    MockApi::new()
        .with_generated_book("Dune", 5)
        .with_generated_book("Emma", 2)
        .with_metadata("Dune", dune_metadata())
}

/// Metadata served for "Dune" by [`sample_library`]
#[must_use]
pub fn dune_metadata() -> BookMetadata {
    BookMetadata {
        author: Some("Frank Herbert".to_string()),
        status: Some("completed".to_string()),
        description: Some("Spice and sandworms".to_string()),
        tags: Some("scifi, classic".to_string()),
    }
}

/// Chapters `1..=count` titled "Chapter n"
#[must_use]
pub fn chapters(count: u32) -> Vec<Chapter> {
    (1..=count)
        .map(|n| Chapter::new(n, format!("Chapter {n}")))
        .collect()
}

/// Books with no author
#[must_use]
pub fn books(names: &[&str]) -> Vec<Book> {
    names.iter().map(|name| Book::new(*name, None)).collect()
}
