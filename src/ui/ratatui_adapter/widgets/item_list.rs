//! Scrollable list of books or chapters

use crate::ui::ratatui_adapter::state::ListCursor;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// One row of an [`ItemList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// Main text
    pub label: String,
    /// Dimmed trailing text, e.g. the author
    pub detail: Option<String>,
}

impl ListRow {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }
}

/// Item list widget with a cursor indicator and an optional flashed row
pub struct ItemList<'a> {
    rows: &'a [ListRow],
    cursor: &'a ListCursor,
    /// Theme for styling
    theme: &'a Theme,
    /// Title for the list block
    title: String,
    /// Row drawn with the reveal highlight
    flashed: Option<usize>,
    /// Text shown when there are no rows
    empty_text: &'a str,
}

impl<'a> ItemList<'a> {
    /// Create a new item list widget
    #[must_use]
    pub fn new(rows: &'a [ListRow], cursor: &'a ListCursor, theme: &'a Theme) -> Self {
        Self {
            rows,
            cursor,
            theme,
            title: format!(" Items ({}) ", rows.len()),
            flashed: None,
            empty_text: "Nothing here",
        }
    }

    /// Set custom title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Highlight row `index`
    #[must_use]
    pub const fn flashed(mut self, index: Option<usize>) -> Self {
        self.flashed = index;
        self
    }

    #[must_use]
    pub const fn empty_text(mut self, text: &'a str) -> Self {
        self.empty_text = text;
        self
    }

    /// Render a single row
    fn render_row(&self, row: &'a ListRow, index: usize) -> ListItem<'a> {
        let is_cursor = index == self.cursor.cursor;
        let cursor_char = if is_cursor { ">" } else { " " };

        let text_style = if self.flashed == Some(index) {
            self.theme.flash_style()
        } else if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let mut spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(row.label.as_str(), text_style),
        ];
        if let Some(detail) = &row.detail {
            spans.push(Span::styled(format!("  {detail}"), self.theme.dimmed_style()));
        }

        let item = ListItem::new(Line::from(spans));
        if self.flashed == Some(index) {
            item.style(self.theme.flash_style())
        } else if is_cursor {
            item.style(self.theme.selected_style())
        } else {
            item
        }
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.rows.is_empty() {
            Line::styled(self.empty_text, self.theme.dimmed_style()).render(inner, buf);
            return;
        }

        // Calculate visible range
        let visible_height = inner.height as usize;
        let start = self.cursor.scroll_offset.min(self.rows.len());
        let end = (start + visible_height).min(self.rows.len());

        let rows: &[ListRow] = self.rows;
        let items: Vec<ListItem> = rows[start..end]
            .iter()
            .enumerate()
            .map(|(i, row)| self.render_row(row, start + i))
            .collect();

        List::new(items).render(inner, buf);
    }
}
