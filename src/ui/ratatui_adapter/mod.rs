//! Ratatui front end for the reader
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               ReaderApp                     │
//! │   (event loop, rendering, reveal timing)    │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │ Navigator  │ │  Ratatui  │ │ Crossterm │
//! │  (state)   │ │ (widgets) │ │  (events) │
//! └─────┬──────┘ └───────────┘ └───────────┘
//!       ▼
//! ┌────────────┐
//! │ Dispatcher │  worker threads → BookApi
//! └────────────┘
//! ```

mod app;
mod events;
mod reveal;
mod state;
mod theme;
pub mod widgets;

pub use app::ReaderApp;
pub use events::{Action, map_key};
pub use reveal::{HIGHLIGHT_DURATION, SETTLE_DELAY, ScrollReveal};
pub use state::{AppState, ListCursor, Mode, StatusMessage};
pub use theme::Theme;
