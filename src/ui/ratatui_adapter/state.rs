//! Application state for the ratatui TUI
//!
//! Holds everything the screen needs that the navigator does not own:
//! list cursors and scroll offsets, the reading scroll, status messages,
//! the help overlay and the pending chapter reveal.

use super::reveal::ScrollReveal;
use crate::ui::output::MessageLevel;
use std::time::{Duration, Instant};

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, warning, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Cursor and scroll position of one list
///
/// `scroll_target` is set by [`ListCursor::center_on`]; the offset then
/// glides toward it a few rows per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    /// Index of the highlighted row
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Offset the list is smoothly scrolling toward
    pub scroll_target: Option<usize>,
    len: usize,
}

impl ListCursor {
    /// Number of rows in the list
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Update the row count, keeping the cursor in range
    pub const fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    /// Back to the first row with no scroll
    pub const fn reset(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
        self.scroll_target = None;
    }

    /// Move cursor up
    pub const fn up(&mut self, height: usize) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll(height);
        }
    }

    /// Move cursor down
    pub const fn down(&mut self, height: usize) {
        if self.cursor + 1 < self.len {
            self.cursor += 1;
            self.adjust_scroll(height);
        }
    }

    /// Move cursor up by one page
    pub const fn page_up(&mut self, height: usize) {
        self.cursor = self.cursor.saturating_sub(height);
        self.adjust_scroll(height);
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self, height: usize) {
        let max_cursor = self.len.saturating_sub(1);
        self.cursor = (self.cursor + height).min(max_cursor);
        self.adjust_scroll(height);
    }

    /// Jump to first item
    pub const fn jump_to_start(&mut self, height: usize) {
        self.cursor = 0;
        self.adjust_scroll(height);
    }

    /// Jump to last item
    pub const fn jump_to_end(&mut self, height: usize) {
        self.cursor = self.len.saturating_sub(1);
        self.adjust_scroll(height);
    }

    /// Put the cursor on `index` and start scrolling it to the middle
    pub fn center_on(&mut self, index: usize, height: usize) {
        if index >= self.len {
            return;
        }
        self.cursor = index;
        let max_offset = self.len.saturating_sub(height);
        self.scroll_target = Some(index.saturating_sub(height / 2).min(max_offset));
    }

    /// Advance a smooth scroll by one step
    ///
    /// Returns `true` while the offset is still moving.
    pub fn step_scroll(&mut self) -> bool {
        let Some(target) = self.scroll_target else {
            return false;
        };
        let distance = target.abs_diff(self.scroll_offset);
        if distance == 0 {
            self.scroll_target = None;
            return false;
        }
        let step = (distance / 3).max(1);
        if target > self.scroll_offset {
            self.scroll_offset += step;
        } else {
            self.scroll_offset -= step;
        }
        true
    }

    /// Keep the cursor visible in a viewport of `height` rows
    const fn adjust_scroll(&mut self, height: usize) {
        self.scroll_target = None;
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }
}

/// Application state for the reader
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode
    pub mode: Mode,
    /// Book list on the home view
    pub library: ListCursor,
    /// Chapter list of the active book
    pub chapters: ListCursor,
    /// Row offset of the reading pane
    pub reading_scroll: usize,
    /// Largest reading offset for the last rendered layout
    pub reading_max_scroll: usize,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Height of the visible list area (set during render)
    pub visible_height: usize,
    /// Pending chapter reveal
    pub reveal: ScrollReveal,
    /// Whether the reader should exit
    pub should_exit: bool,
    seen_view_switches: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl AppState {
    /// Create new application state
    #[must_use]
    pub fn new(message_ttl: Duration) -> Self {
        Self {
            mode: Mode::Normal,
            library: ListCursor::default(),
            chapters: ListCursor::default(),
            reading_scroll: 0,
            reading_max_scroll: 0,
            messages: Vec::new(),
            message_ttl,
            visible_height: 20, // Default, updated during render
            reveal: ScrollReveal::new(),
            should_exit: false,
            seen_view_switches: 0,
        }
    }

    /// Reset every scroll position if the view changed since the last call
    ///
    /// Returns `true` when a reset happened.
    pub fn sync_view_switches(&mut self, view_switches: u64) -> bool {
        if view_switches == self.seen_view_switches {
            return false;
        }
        self.seen_view_switches = view_switches;
        self.library.reset();
        self.chapters.reset();
        self.reading_scroll = 0;
        self.reveal.cancel();
        true
    }

    /// Scroll the reading pane, clamped to `max` lines
    pub fn scroll_reading(&mut self, delta: isize, max: usize) {
        self.reading_scroll = self
            .reading_scroll
            .saturating_add_signed(delta)
            .min(max);
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Get active (non-expired) messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Remove expired messages
    pub fn cleanup_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|m| !m.is_expired(ttl));
    }
}
