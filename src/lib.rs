//! Readr - a terminal reader for a remote book library
//!
//! This library provides the client side of a small book server: a typed
//! HTTP API client, a navigation state machine for the home, chapter list
//! and reading views, and a ratatui front end that drives it.

use thiserror::Error;

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
pub mod prefs;
pub mod reader;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ReadrError {
    /// Book server request failed
    #[error("API error: {0}")]
    Api(#[from] api::ApiError),
    /// Navigation rejected an operation
    #[error("{0}")]
    Nav(#[from] reader::NavError),
    /// Terminal UI failed
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Preferences could not be read or written
    #[error("Preferences error: {0}")]
    Prefs(#[from] prefs::PrefsError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Log output could not be set up
    #[error("Logging error: {0}")]
    Logging(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
