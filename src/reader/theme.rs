//! Light/dark theme mode
//!
//! The active mode is an explicit value held by the navigator. The initial
//! mode comes from the persisted preference, falling back to what the
//! terminal reports about its background colour.

use std::fmt;
use std::str::FromStr;

/// Presentation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Icon and label of the theme toggle
///
/// The toggle always advertises the mode it would switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeAffordance {
    pub icon: &'static str,
    pub text: &'static str,
}

impl ThemeMode {
    /// The opposite mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Persisted representation (`"dark"` or `"light"`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Toggle affordance for this mode
    #[must_use]
    pub const fn affordance(self) -> ThemeAffordance {
        match self {
            Self::Dark => ThemeAffordance {
                icon: "☀",
                text: "Light mode",
            },
            Self::Light => ThemeAffordance {
                icon: "☾",
                text: "Dark mode",
            },
        }
    }

    /// Pick the starting mode
    ///
    /// An explicit persisted choice wins, then the platform preference,
    /// then light.
    #[must_use]
    pub fn resolve(persisted: Option<Self>, platform: Option<Self>) -> Self {
        persisted.or(platform).unwrap_or_default()
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

/// Colour scheme the terminal reports through `COLORFGBG`
#[must_use]
pub fn platform_preference() -> Option<ThemeMode> {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| scheme_from_colorfgbg(&value))
}

/// Interpret a `COLORFGBG` value such as `"15;0"` or `"0;default;15"`
///
/// The last field is the background palette index. Indices 0-6 and 8 are
/// dark backgrounds, 7 and 9-15 are light ones.
#[must_use]
pub fn scheme_from_colorfgbg(value: &str) -> Option<ThemeMode> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match background {
        0..=6 | 8 => Some(ThemeMode::Dark),
        7 | 9..=15 => Some(ThemeMode::Light),
        _ => None,
    }
}
