//! Output formatting for CLI display
//!
//! Line formatting for the plain subcommands. Quiet mode drops decoration
//! so the output can be piped; server text is always sanitized.

use crate::api::{Book, BookMetadata, Chapter};
use crate::ui::{sanitize_display, sanitize_line};
use colored::Colorize;

/// Format a book for the book listing
#[must_use]
pub fn book_line(book: &Book, quiet: bool) -> String {
    let name = sanitize_line(&book.book_name);
    if quiet {
        return name;
    }
    match book.author.as_deref() {
        Some(author) if !author.trim().is_empty() => {
            format!("  {} {}", name.bold(), format!("by {}", sanitize_line(author)).dimmed())
        }
        _ => format!("  {}", name.bold()),
    }
}

/// Format a chapter for the chapter listing
#[must_use]
pub fn chapter_line(chapter: &Chapter, quiet: bool) -> String {
    let title = sanitize_line(&chapter.title);
    if quiet {
        format!("{}\t{title}", chapter.chapter_num)
    } else {
        format!("  {:>4}. {title}", chapter.chapter_num.to_string().cyan())
    }
}

/// Format the book header shown above a chapter listing
///
/// Without metadata the header is just the book name.
#[must_use]
pub fn book_header(book: &str, metadata: Option<&BookMetadata>) -> Vec<String> {
    let name = sanitize_line(book).bold().to_string();
    let Some(meta) = metadata else {
        return vec![name];
    };
    let badges = meta
        .tag_badges()
        .iter()
        .map(|tag| format!("[{}]", sanitize_line(tag)).magenta().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    vec![
        name,
        format!(
            "{} {}",
            "Author:".dimmed(),
            sanitize_line(meta.author_or_placeholder())
        ),
        format!(
            "{} {}",
            "Status:".dimmed(),
            sanitize_line(meta.status_or_placeholder())
        ),
        format!("{} {badges}", "Tags:  ".dimmed()),
        sanitize_line(meta.description_or_placeholder()),
    ]
}

/// Format chapter text for printing
#[must_use]
pub fn chapter_text(title: &str, body: &str, quiet: bool) -> String {
    let body = sanitize_display(body);
    if quiet {
        body.into_owned()
    } else {
        format!("{}\n\n{body}", sanitize_line(title).bold().underline())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_book_line_is_bare_name() {
        let book = Book::new("Dune", Some("Frank Herbert".to_string()));
        assert_eq!(book_line(&book, true), "Dune");
        let line = book_line(&book, false);
        assert!(line.contains("Dune"));
        assert!(line.contains("by Frank Herbert"));
    }

    #[test]
    fn test_quiet_chapter_line_is_tab_separated() {
        let chapter = Chapter::new(7, "The Storm");
        assert_eq!(chapter_line(&chapter, true), "7\tThe Storm");
        assert!(chapter_line(&chapter, false).contains("The Storm"));
    }

    #[test]
    fn test_header_without_metadata_is_name_only() {
        let lines = book_header("Dune", None);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Dune"));
    }

    #[test]
    fn test_header_uses_placeholders() {
        let meta = BookMetadata::default();
        let lines = book_header("Dune", Some(&meta));
        assert!(lines[1].contains("unknown author"));
        assert!(lines[2].contains("ongoing"));
        assert!(lines[3].contains("[none]"));
        assert_eq!(lines[4], "no description");
    }

    #[test]
    fn test_chapter_text_strips_escapes() {
        let text = chapter_text("One", "It was\x1b[31m dark", true);
        assert_eq!(text, "It was[31m dark");
    }
}
