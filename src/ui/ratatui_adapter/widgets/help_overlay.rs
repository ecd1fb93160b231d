//! Full key reference, drawn over the current view

use super::centered;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Lists",
        &[
            ("↑/↓  j/k", "Move cursor"),
            ("PgUp/PgDn", "Page up/down"),
            ("Home/End  g/G", "First/last entry"),
            ("Enter", "Open book or chapter"),
            ("ESC", "Back"),
        ],
    ),
    (
        "Reading",
        &[
            ("↑/↓  j/k", "Scroll text"),
            ("←/p  →/n", "Previous/next chapter"),
            ("ESC", "Back to chapters"),
        ],
    ),
    (
        "Anywhere",
        &[
            ("r", "Reload books (home)"),
            ("t", "Toggle light/dark"),
            ("q  Ctrl+C", "Quit"),
        ],
    ),
];

const KEY_COLUMN: usize = 16;
const WIDTH: u16 = 46;

/// Modal help screen; any key closes it
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let heading = self.theme.cursor_style().add_modifier(Modifier::UNDERLINED);
        let mut lines = Vec::new();
        for (title, keys) in SECTIONS {
            lines.push(Line::default());
            lines.push(Line::styled(format!(" {title}"), heading));
            for (key, action) in *keys {
                lines.push(Line::from(vec![
                    Span::styled(format!("   {key:<KEY_COLUMN$}"), self.theme.cursor_style()),
                    Span::styled(*action, self.theme.normal_style()),
                ]));
            }
        }
        lines.push(Line::default());
        lines.push(Line::styled(" Press any key to close", self.theme.dimmed_style()));
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
        let popup = centered(WIDTH, height, area);

        Clear.render(popup, buf);
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.cursor_style())
                    .style(self.theme.base_style())
                    .title(" Help ")
                    .title_alignment(Alignment::Center),
            )
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_section() {
        let theme = Theme::dark();
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 30));
        HelpOverlay::new(&theme).render(buf.area, &mut buf);

        let text: String = buf.content().iter().map(ratatui::buffer::Cell::symbol).collect();
        for (title, _) in SECTIONS {
            assert!(text.contains(title), "missing {title}");
        }
        assert!(text.contains("Toggle light/dark"));
    }
}
