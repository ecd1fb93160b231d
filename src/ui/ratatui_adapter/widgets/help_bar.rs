//! One-line key hints for the active view

use crate::reader::View;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A key and what it does, e.g. `Enter` / `open`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

const fn hint(key: &'static str, action: &'static str) -> KeyHint {
    KeyHint { key, action }
}

const HOME: &[KeyHint] = &[hint("Enter", "open"), hint("r", "reload")];
const CHAPTERS: &[KeyHint] = &[hint("Enter", "read"), hint("Esc", "books")];
const READING: &[KeyHint] = &[hint("←/→", "prev/next"), hint("Esc", "chapters")];
const ALWAYS: &[KeyHint] = &[hint("t", "theme"), hint("?", "help"), hint("q", "quit")];

pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for the keys that do something on `view`
    #[must_use]
    pub fn hints_for(view: View) -> Vec<KeyHint> {
        let specific = match view {
            View::Home => HOME,
            View::ChapterList => CHAPTERS,
            View::Reading => READING,
        };
        specific.iter().chain(ALWAYS).copied().collect()
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let separator = Span::styled("  ", self.theme.dimmed_style());
        let spans: Vec<Span> = self
            .hints
            .iter()
            .enumerate()
            .flat_map(|(i, hint)| {
                let lead = (i > 0).then(|| separator.clone());
                lead.into_iter().chain([
                    Span::styled(hint.key, self.theme.cursor_style()),
                    Span::styled(":", self.theme.dimmed_style()),
                    Span::styled(hint.action, self.theme.normal_style()),
                ])
            })
            .collect();

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_follow_view() {
        let keys = |view| {
            HelpBar::hints_for(view)
                .into_iter()
                .map(|h| h.key)
                .collect::<Vec<_>>()
        };
        assert!(keys(View::Home).contains(&"r"));
        assert!(keys(View::Reading).contains(&"←/→"));
        assert!(!keys(View::ChapterList).contains(&"←/→"));
        assert_eq!(keys(View::Home).last(), Some(&"q"));
    }
}
