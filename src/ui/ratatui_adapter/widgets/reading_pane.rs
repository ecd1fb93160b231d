//! Reading pane widget for chapter text

use crate::reader::{Pagination, ReadingPage};
use crate::ui::ratatui_adapter::theme::Theme;
use crate::ui::text::{sanitize_display, sanitize_line};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Chapter text with previous/next controls underneath
///
/// Long paragraphs are word-wrapped, so the scroll offset counts screen rows
/// rather than lines of the chapter body.
pub struct ReadingPane<'a> {
    page: Option<&'a ReadingPage>,
    pagination: Pagination,
    theme: &'a Theme,
    /// Scroll offset
    scroll: u16,
}

impl<'a> ReadingPane<'a> {
    #[must_use]
    pub const fn new(
        page: Option<&'a ReadingPage>,
        pagination: Pagination,
        theme: &'a Theme,
    ) -> Self {
        Self {
            page,
            pagination,
            theme,
            scroll: 0,
        }
    }

    /// Set scroll offset
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = if scroll > u16::MAX as usize {
            u16::MAX
        } else {
            scroll as u16
        };
        self
    }

    /// Area inside the text border when drawn into `area`
    #[must_use]
    pub fn text_area(area: Rect) -> Rect {
        let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);
        Block::default().borders(Borders::ALL).inner(chunks[0])
    }

    /// Largest useful scroll offset when drawn into `area`
    ///
    /// At this offset the last wrapped row sits on the bottom of the pane.
    #[must_use]
    pub fn max_scroll(&self, area: Rect) -> usize {
        let inner = Self::text_area(area);
        if inner.width == 0 {
            return 0;
        }
        let rows = Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .line_count(inner.width);
        rows.saturating_sub(usize::from(inner.height))
    }

    fn lines(&self) -> Vec<Line<'static>> {
        self.page.map_or_else(
            || vec![Line::styled("No chapter loaded", self.theme.dimmed_style())],
            |page| {
                sanitize_display(&page.body)
                    .lines()
                    .map(|l| Line::raw(l.to_string()))
                    .collect()
            },
        )
    }

    fn control(&self, label: &'a str, enabled: bool) -> Span<'a> {
        if enabled {
            Span::styled(label, self.theme.cursor_style())
        } else {
            Span::styled(label, self.theme.dimmed_style())
        }
    }
}

impl Widget for ReadingPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);

        let title = self.page.map_or_else(
            || String::from(" Reading "),
            |page| format!(" {} ", sanitize_line(&page.title)),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(Span::styled(title, self.theme.title_style()));

        Paragraph::new(self.lines())
            .block(block)
            .scroll((self.scroll, 0))
            .wrap(Wrap { trim: false })
            .render(chunks[0], buf);

        let controls = Line::from(vec![
            self.control("← prev", self.pagination.prev_enabled),
            Span::styled("   |   ", self.theme.dimmed_style()),
            self.control("next →", self.pagination.next_enabled),
        ]);
        Paragraph::new(controls)
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> ReadingPage {
        ReadingPage {
            chapter: 1,
            title: "One".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_max_scroll_counts_wrapped_rows() {
        let theme = Theme::light();
        let page = page(&"x".repeat(100));
        let pane = ReadingPane::new(Some(&page), Pagination::default(), &theme);

        // 10 columns and 3 rows of text inside the border
        let area = Rect::new(0, 0, 12, 6);
        assert_eq!(ReadingPane::text_area(area), Rect::new(1, 1, 10, 3));
        assert_eq!(pane.max_scroll(area), 7);
    }

    #[test]
    fn test_short_text_does_not_scroll() {
        let theme = Theme::light();
        let page = page("one\ntwo");
        let pane = ReadingPane::new(Some(&page), Pagination::default(), &theme);
        assert_eq!(pane.max_scroll(Rect::new(0, 0, 40, 10)), 0);
    }
}
