//! Configuration module for readr
//!
//! Manages the reader's settings: which server to talk to, how long to wait
//! for it, and how chatty the CLI should be. Configuration is stored in the
//! user's config directory.

mod setup;

pub use setup::first_time_setup;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Server used when nothing else is configured
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Keys accepted by `readr config get/set`
pub const KEYS: [&str; 4] = ["server_url", "request_timeout_secs", "quiet", "message_ttl_secs"];

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_message_ttl_secs() -> u64 {
    5
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ReadrConfig {
    /// Base URL of the book server
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Per-request timeout in seconds, 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// How long status messages stay in the TUI
    #[serde(default = "default_message_ttl_secs")]
    pub message_ttl_secs: u64,
}

impl Default for ReadrConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            request_timeout_secs: default_timeout_secs(),
            quiet: false,
            message_ttl_secs: default_message_ttl_secs(),
        }
    }
}

impl ReadrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("readr").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory, serialization or write fails.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }

    /// Request timeout, `None` when disabled
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    #[must_use]
    pub const fn message_ttl(&self) -> Duration {
        Duration::from_secs(self.message_ttl_secs)
    }

    /// Value of `key` as text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "server_url" => Ok(self.server_url.clone()),
            "request_timeout_secs" => Ok(self.request_timeout_secs.to_string()),
            "quiet" => Ok(self.quiet.to_string()),
            "message_ttl_secs" => Ok(self.message_ttl_secs.to_string()),
            _ => Err(ConfigError::NotFound(key.to_string())),
        }
    }

    /// Set `key` from text, validating the value
    ///
    /// Does not save; call [`ReadrConfig::save`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys and
    /// `ConfigError::Message` for values that do not parse.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "server_url" => {
                reqwest::Url::parse(value).map_err(|e| {
                    ConfigError::Message(format!("Invalid server URL '{value}': {e}"))
                })?;
                self.server_url = value.to_string();
            }
            "request_timeout_secs" => self.request_timeout_secs = parse_number(key, value)?,
            "message_ttl_secs" => self.message_ttl_secs = parse_number(key, value)?,
            "quiet" => {
                self.quiet = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quiet: '{value}'. Use true or false"
                    ))
                })?;
            }
            _ => return Err(ConfigError::NotFound(key.to_string())),
        }
        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .parse()
        .map_err(|_| {
            ConfigError::Message(format!(
                "Invalid value for {key}: '{value}'. Expected a whole number"
            ))
        })
}
