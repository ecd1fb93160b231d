//! Status messages for the plain subcommands
//!
//! Listings are written to any `io::Write` by the commands themselves. A
//! [`Notifier`] carries the one-line reports around them ("Set key = value",
//! "continuing without a log file"), which go to the terminal in normal runs
//! and into memory under test.

use colored::Colorize;
use std::sync::Mutex;

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Success,
    Warning,
    Info,
}

impl MessageLevel {
    /// Marker printed in front of the message
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
            Self::Normal => "",
        }
    }
}

/// Sink for status messages
///
/// Only [`Notifier::notify`] is required; the level helpers forward to it.
pub trait Notifier: Send + Sync {
    fn notify(&self, level: MessageLevel, message: &str);

    fn error(&self, message: &str) {
        self.notify(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.notify(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.notify(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.notify(MessageLevel::Info, message);
    }
}

/// Prints coloured messages; errors go to stderr
///
/// A quiet notifier drops everything except errors.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, level: MessageLevel, message: &str) {
        let marker = level.marker();
        match level {
            MessageLevel::Error => eprintln!("{} {message}", marker.red()),
            _ if self.quiet => {}
            MessageLevel::Success => println!("{} {message}", marker.green()),
            MessageLevel::Warning => println!("{} {message}", marker.yellow()),
            MessageLevel::Info => println!("{}", message.dimmed()),
            MessageLevel::Normal => println!("{message}"),
        }
    }
}

/// Keeps every message in memory, oldest first
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: MessageLevel, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((level, message.to_string()));
        }
    }
}
