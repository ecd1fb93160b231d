//! User interface
//!
//! Two surfaces share this module. The ratatui adapter is the interactive
//! reader; [`output`] carries the coloured status messages of the plain
//! subcommands. Every string that came from the server passes through
//! [`sanitize_display`] before it is drawn or printed.
//!
//! ## Output Messages
//!
//! ```
//! use readr::ui::output::{Notifier, RecordingNotifier};
//!
//! let output = RecordingNotifier::new();
//! output.success("Loaded 3 books");
//! output.warning("No metadata for Dune");
//! assert_eq!(output.messages().len(), 2);
//! ```

mod error;
mod text;

pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{ConsoleNotifier, MessageLevel, Notifier, RecordingNotifier};
pub use ratatui_adapter::ReaderApp;
pub use text::{sanitize_display, sanitize_line};
