//! Reader navigation core
//!
//! Tracks the active book and chapter, switches between the home, chapter
//! list and reading views, and decides which loads to issue. Loads are
//! executed by the [`Dispatcher`] and their outcomes applied back to the
//! [`Navigator`] on the UI thread.

mod dispatch;
mod error;
mod navigator;
mod session;
mod theme;

pub use dispatch::{Dispatcher, execute, fetch_book_details};
pub use error::{NavError, Result};
pub use navigator::{
    BookDetails, Navigator, Outcome, ReadingPage, Request, RequestKind, RequestToken,
};
pub use session::{Pagination, SessionState, View};
pub use theme::{ThemeAffordance, ThemeMode, platform_preference, scheme_from_colorfgbg};
