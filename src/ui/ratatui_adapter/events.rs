//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events to reader actions. The mapping depends on
//! the active view and on whether an overlay or alert is showing.

use super::state::Mode;
use crate::reader::View;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Something the user asked the reader to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
    /// Open the highlighted book or chapter
    Open,
    /// Leave the current view
    Back,
    PrevChapter,
    NextChapter,
    ToggleTheme,
    /// Fetch the book list again
    Reload,
    ShowHelp,
    CloseHelp,
    DismissAlert,
    /// Nothing to do
    Ignored,
}

/// Map a key press to an action
#[must_use]
pub fn map_key(view: View, mode: Mode, alert_open: bool, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    if alert_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Action::DismissAlert,
            _ => Action::Ignored,
        };
    }

    if mode == Mode::Help {
        // Any key closes help
        return Action::CloseHelp;
    }

    match (key.code, view) {
        (KeyCode::Char('q'), _) => Action::Quit,
        (KeyCode::Char('?') | KeyCode::F(1), _) => Action::ShowHelp,
        (KeyCode::Char('t'), _) => Action::ToggleTheme,

        // Navigation
        (KeyCode::Up | KeyCode::Char('k'), _) => Action::Up,
        (KeyCode::Down | KeyCode::Char('j'), _) => Action::Down,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown | KeyCode::Char(' '), _) => Action::PageDown,
        (KeyCode::Home | KeyCode::Char('g'), _) => Action::Top,
        (KeyCode::End | KeyCode::Char('G'), _) => Action::Bottom,

        (KeyCode::Esc | KeyCode::Backspace, View::ChapterList | View::Reading) => Action::Back,
        (KeyCode::Enter, View::Home | View::ChapterList) => Action::Open,
        (KeyCode::Char('r'), View::Home) => Action::Reload,

        // Pagination
        (KeyCode::Left | KeyCode::Char('p' | 'h'), View::Reading) => Action::PrevChapter,
        (KeyCode::Right | KeyCode::Char('n' | 'l'), View::Reading) => Action::NextChapter,

        _ => Action::Ignored,
    }
}

/// Map a mouse event to an action
#[must_use]
pub const fn map_mouse(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollUp => Action::Up,
        MouseEventKind::ScrollDown => Action::Down,
        _ => Action::Ignored,
    }
}

/// Poll for one event and map it
///
/// Returns `Action::Ignored` when nothing arrived within `timeout`.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_action(
    view: View,
    mode: Mode,
    alert_open: bool,
    timeout: Duration,
) -> std::io::Result<Action> {
    if !event::poll(timeout)? {
        return Ok(Action::Ignored);
    }

    let action = match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            map_key(view, mode, alert_open, key)
        }
        Event::Mouse(mouse) if !alert_open && mode == Mode::Normal => map_mouse(mouse),
        _ => Action::Ignored,
    };

    Ok(action)
}
