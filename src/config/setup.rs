//! Interactive setup wizard for first-time configuration
//!
//! This module handles the interactive prompts for creating an initial
//! configuration when readr is run for the first time.

use super::{DEFAULT_SERVER_URL, ReadrConfig};
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};

/// Interactive first-time setup - prompts for the book server
///
/// Asks for the server URL (default: a server on localhost), validates it
/// and saves the configuration.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - User input cannot be read
/// - The configuration cannot be saved
///
/// # Examples
/// ```ignore
/// use readr::config::first_time_setup;
///
/// let config = first_time_setup()?;
/// println!("Reading from {}", config.server_url);
/// ```
pub fn first_time_setup() -> Result<ReadrConfig, ConfigError> {
    println!("Welcome to readr! Let's point it at your book server.\n");

    let server_url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Server URL")
        .default(DEFAULT_SERVER_URL.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            reqwest::Url::parse(input.trim())
                .map(|_| ())
                .map_err(|e| format!("Not a valid URL: {e}"))
        })
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let mut config = ReadrConfig::default();
    config.set_value("server_url", &server_url)?;

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_module_compiles() {
        // Ensures the module compiles and the function signature is correct
        let _: fn() -> Result<ReadrConfig, ConfigError> = first_time_setup;
    }
}
