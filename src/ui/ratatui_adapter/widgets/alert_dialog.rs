//! Blocking alert dialog
//!
//! A modal with a single acknowledge button. While it is open every other
//! key is swallowed.

use super::centered;
use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Alert dialog overlay widget
pub struct AlertDialog<'a> {
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> AlertDialog<'a> {
    #[must_use]
    pub const fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for AlertDialog<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message_width = self.message.chars().count().min(u16::MAX as usize) as u16 + 4;
        let width = message_width
            .clamp(30, 70)
            .min(area.width.saturating_sub(4));
        let text_width = width.saturating_sub(4).max(1);
        let message_lines = (message_width.saturating_sub(4)).div_ceil(text_width).clamp(1, 6);
        // border + spacing + message + spacing + button + help + border
        let height = 6 + message_lines;

        let modal_area = centered(width, height, area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.level_style(MessageLevel::Error).add_modifier(Modifier::BOLD))
            .style(self.theme.base_style())
            .title(" Error ")
            .title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1),             // Spacing
            Constraint::Length(message_lines), // Message
            Constraint::Length(1),             // Spacing
            Constraint::Length(1),             // Button
            Constraint::Length(1),             // Help
        ])
        .split(inner);

        Paragraph::new(self.message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(self.theme.normal_style())
            .render(chunks[1], buf);

        let button = Line::from(vec![Span::styled(" OK ", self.theme.selected_style())]);
        Paragraph::new(button)
            .alignment(Alignment::Center)
            .render(chunks[3], buf);

        Paragraph::new("Enter/ESC: dismiss")
            .style(self.theme.dimmed_style())
            .alignment(Alignment::Center)
            .render(chunks[4], buf);
    }
}
