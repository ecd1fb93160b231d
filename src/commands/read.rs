//! Read command - print one chapter

use crate::{api::BookApi, output, ReadrError};
use std::io::Write;

type Result<T> = std::result::Result<T, ReadrError>;

/// Print chapter `chapter` of `book`
///
/// # Errors
/// Returns `ReadrError::InvalidInput` for chapter 0, the API error if the
/// content cannot be loaded, or an I/O error if `out` cannot be written.
pub fn execute(
    api: &dyn BookApi,
    book: &str,
    chapter: u32,
    out: &mut dyn Write,
    quiet: bool,
) -> Result<()> {
    if chapter == 0 {
        return Err(ReadrError::InvalidInput(
            "Chapter numbers start at 1".to_string(),
        ));
    }

    let content = api.content(book, chapter)?;
    tracing::info!(book, chapter, "read chapter");
    writeln!(out, "{}", output::chapter_text(&content.title, &content.content, quiet))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApi;

    #[test]
    fn test_read_prints_body() {
        let api = MockApi::new().with_content("Dune", 2, "Two", "Sand everywhere.");
        let mut out = Vec::new();
        execute(&api, "Dune", 2, &mut out, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Sand everywhere.\n");
    }

    #[test]
    fn test_read_with_title() {
        let api = MockApi::new().with_content("Dune", 1, "Arrakis", "Hot.");
        let mut out = Vec::new();
        execute(&api, "Dune", 1, &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Arrakis"));
        assert!(text.ends_with("Hot.\n"));
    }

    #[test]
    fn test_read_rejects_zero() {
        let api = MockApi::new();
        let mut out = Vec::new();
        assert!(matches!(
            execute(&api, "Dune", 0, &mut out, false),
            Err(ReadrError::InvalidInput(_))
        ));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_read_missing_chapter() {
        let api = MockApi::new().with_generated_book("Dune", 1);
        let mut out = Vec::new();
        assert!(matches!(
            execute(&api, "Dune", 5, &mut out, false),
            Err(ReadrError::Api(_))
        ));
    }
}
