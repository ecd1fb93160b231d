//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs against a [`BookApi`](crate::api::BookApi).

pub mod browse;
pub mod config;
pub mod list;
pub mod read;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use config::execute as config;
pub use list::{books, chapters};
pub use read::execute as read;
