//! Book information panel shown above the chapter list

use crate::api::BookMetadata;
use crate::ui::ratatui_adapter::theme::Theme;
use crate::ui::text::sanitize_line;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Book name, metadata fields and tag badges
///
/// Without metadata only the book name is shown. Placeholders stand in for
/// fields missing from metadata the server did return.
pub struct BookInfo<'a> {
    book: &'a str,
    metadata: Option<&'a BookMetadata>,
    theme: &'a Theme,
}

impl<'a> BookInfo<'a> {
    #[must_use]
    pub const fn new(book: &'a str, metadata: Option<&'a BookMetadata>, theme: &'a Theme) -> Self {
        Self {
            book,
            metadata,
            theme,
        }
    }

    /// Build content lines for the panel
    fn build_content(&self) -> Vec<Line<'static>> {
        let name = Line::from(Span::styled(sanitize_line(self.book), self.theme.title_style()));
        let Some(meta) = self.metadata else {
            return vec![name];
        };
        let label = |text: &'static str| Span::styled(text, self.theme.dimmed_style());

        let mut badges = vec![label("Tags:   ")];
        for (i, tag) in meta.tag_badges().iter().enumerate() {
            if i > 0 {
                badges.push(Span::raw(" "));
            }
            badges.push(Span::styled(
                format!(" {} ", sanitize_line(tag)),
                self.theme.tag_style(),
            ));
        }

        vec![
            name,
            Line::from(vec![
                label("Author: "),
                Span::raw(sanitize_line(meta.author_or_placeholder())),
            ]),
            Line::from(vec![
                label("Status: "),
                Span::raw(sanitize_line(meta.status_or_placeholder())),
            ]),
            Line::from(badges),
            Line::from(Span::styled(
                sanitize_line(meta.description_or_placeholder()),
                self.theme.normal_style(),
            )),
        ]
    }
}

impl Widget for BookInfo<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Book ");

        Paragraph::new(self.build_content())
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(metadata: Option<&BookMetadata>) -> String {
        let theme = Theme::light();
        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(BookInfo::new("Dune", metadata, &theme), frame.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_name_only_without_metadata() {
        let screen = render(None);
        assert!(screen.contains("Dune"));
        assert!(!screen.contains("Author:"));
        assert!(!screen.contains("Tags:"));
        assert!(!screen.contains("unknown author"));
    }

    #[test]
    fn test_placeholders_for_empty_metadata() {
        let meta = BookMetadata::default();
        let screen = render(Some(&meta));
        assert!(screen.contains("unknown author"));
        assert!(screen.contains("ongoing"));
        assert!(screen.contains("no description"));
        assert!(screen.contains(" none "));
    }

    #[test]
    fn test_tag_badges() {
        let meta = BookMetadata {
            author: Some("Frank Herbert".to_string()),
            tags: Some("scifi, desert".to_string()),
            ..Default::default()
        };
        let screen = render(Some(&meta));
        assert!(screen.contains("Frank Herbert"));
        assert!(screen.contains(" scifi "));
        assert!(screen.contains(" desert "));
    }
}
