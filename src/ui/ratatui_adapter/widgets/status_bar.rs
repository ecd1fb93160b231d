//! Status bar widget for messages, location and the theme toggle

use crate::reader::{RequestKind, ThemeAffordance};
use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::state::StatusMessage;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget
///
/// The left side shows the latest message, or the current location when
/// there is none. The right side shows a loading marker and the theme
/// toggle affordance.
pub struct StatusBar<'a> {
    /// Messages to display
    messages: &'a [&'a StatusMessage],
    /// Theme for styling
    theme: &'a Theme,
    /// Where the reader is, e.g. "Dune · chapter 3/12"
    location: &'a str,
    /// Request still awaited
    loading: Option<RequestKind>,
    /// Toggle icon and label
    affordance: ThemeAffordance,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(
        messages: &'a [&'a StatusMessage],
        theme: &'a Theme,
        location: &'a str,
        affordance: ThemeAffordance,
    ) -> Self {
        Self {
            messages,
            theme,
            location,
            loading: None,
            affordance,
        }
    }

    /// Show a loading marker for `kind`
    #[must_use]
    pub const fn loading(mut self, kind: Option<RequestKind>) -> Self {
        self.loading = kind;
        self
    }

    const fn loading_label(kind: RequestKind) -> &'static str {
        match kind {
            RequestKind::Library => "loading books…",
            RequestKind::Chapters => "loading chapters…",
            RequestKind::Content => "loading chapter…",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" readr ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(40)])
            .split(inner);

        let left = if let Some(msg) = self.messages.last() {
            let style = self.theme.level_style(msg.level);
            let marker = msg.level.marker();
            let text = if marker.is_empty() {
                msg.text.clone()
            } else {
                format!("{marker} {}", msg.text)
            };
            Line::styled(text, style)
        } else {
            Line::styled(self.location, self.theme.dimmed_style())
        };
        Paragraph::new(left).render(chunks[0], buf);

        let mut right = Vec::new();
        if let Some(kind) = self.loading {
            right.push(Span::styled(
                Self::loading_label(kind),
                self.theme.level_style(MessageLevel::Info),
            ));
            right.push(Span::raw("  "));
        }
        right.push(Span::styled(
            format!("[{} {}]", self.affordance.icon, self.affordance.text),
            self.theme.cursor_style(),
        ));
        Paragraph::new(Line::from(right))
            .alignment(ratatui::layout::Alignment::Right)
            .render(chunks[1], buf);
    }
}
