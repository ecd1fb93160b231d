//! Light and dark palettes for the reader
//!
//! Widgets never pick colours themselves; they ask the [`Theme`] for a style
//! by role. The palette is rebuilt from the navigator's [`ThemeMode`] on
//! every frame, so a toggle shows up on the next draw.

use crate::reader::ThemeMode;
use crate::ui::output::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Colours for one theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    /// Body text
    pub text: Color,
    /// Headings, list titles and the active book name
    pub heading: Color,
    /// Secondary text, placeholders and disabled controls
    pub muted: Color,
    pub border: Color,
    /// Cursor row background
    pub cursor_bg: Color,
    /// Cursor row text
    pub cursor_fg: Color,
    /// Keys, enabled controls and the theme affordance
    pub accent: Color,
    /// Background of the row revealed on return to the chapter list
    pub flash: Color,
    pub badge: Color,
    /// Status colours, indexed by message level
    pub ok: Color,
    pub alert: Color,
    pub caution: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(ThemeMode::default())
    }
}

impl Theme {
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Warm grey on near-black
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            background: Color::Rgb(0x12, 0x12, 0x12),
            text: Color::Rgb(0xd4, 0xd0, 0xc8),
            heading: Color::White,
            muted: Color::DarkGray,
            border: Color::Rgb(0x3a, 0x3a, 0x3a),
            cursor_bg: Color::Rgb(0x26, 0x4f, 0x78),
            cursor_fg: Color::White,
            accent: Color::Cyan,
            flash: Color::Rgb(0x5c, 0x4b, 0x00),
            badge: Color::Magenta,
            ok: Color::Green,
            alert: Color::LightRed,
            caution: Color::Yellow,
        }
    }

    /// Ink on paper
    #[must_use]
    pub const fn light() -> Self {
        Self {
            background: Color::Rgb(0xfa, 0xf8, 0xf2),
            text: Color::Rgb(0x22, 0x22, 0x22),
            heading: Color::Black,
            muted: Color::Rgb(0x80, 0x7c, 0x74),
            border: Color::Rgb(0xc8, 0xc4, 0xba),
            cursor_bg: Color::Rgb(0xc6, 0xdc, 0xf5),
            cursor_fg: Color::Black,
            accent: Color::Blue,
            flash: Color::Rgb(0xff, 0xec, 0x8c),
            badge: Color::Rgb(0x8e, 0x24, 0xaa),
            ok: Color::Rgb(0x1b, 0x7a, 0x2e),
            alert: Color::Red,
            caution: Color::Rgb(0xb0, 0x6a, 0x00),
        }
    }

    /// Whole-screen fill
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::new().bg(self.background).fg(self.text)
    }

    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::new().fg(self.text)
    }

    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::new()
            .bg(self.cursor_bg)
            .fg(self.cursor_fg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::new().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn flash_style(&self) -> Style {
        Style::new()
            .bg(self.flash)
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::new().fg(self.border)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::new().fg(self.muted)
    }

    #[must_use]
    pub fn tag_style(&self) -> Style {
        Style::new().fg(self.badge).add_modifier(Modifier::REVERSED)
    }

    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::new().fg(self.heading).add_modifier(Modifier::BOLD)
    }

    /// Colour for a status message of `level`
    #[must_use]
    pub fn level_style(&self, level: MessageLevel) -> Style {
        let fg = match level {
            MessageLevel::Success => self.ok,
            MessageLevel::Error => self.alert,
            MessageLevel::Warning => self.caution,
            MessageLevel::Info => self.accent,
            MessageLevel::Normal => self.text,
        };
        Style::new().fg(fg)
    }
}
