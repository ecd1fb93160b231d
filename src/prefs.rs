//! Persisted client preferences
//!
//! The only preference is the explicit theme choice. It lives in
//! `preferences.toml` under the user's data directory as `theme = "dark"`
//! or `theme = "light"`; a missing key means the user never chose.

use crate::reader::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading or writing the preferences file
#[derive(Debug, Error)]
pub enum PrefsError {
    /// The user data directory cannot be determined
    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse preferences: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize preferences: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Result type for preference operations
pub type Result<T> = std::result::Result<T, PrefsError>;

/// Storage for the explicit theme choice
pub trait PreferenceStore: Send {
    /// The persisted theme, `None` when the user never chose one
    ///
    /// # Errors
    ///
    /// Returns `PrefsError` if the store cannot be read.
    fn theme(&self) -> Result<Option<ThemeMode>>;

    /// Persist an explicit theme choice
    ///
    /// # Errors
    ///
    /// Returns `PrefsError` if the store cannot be written.
    fn set_theme(&mut self, mode: ThemeMode) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

/// TOML-file backed preference store
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Store at an explicit path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data dir>/readr/preferences.toml`
    ///
    /// # Errors
    ///
    /// Returns `PrefsError::NoDataDir` if the data directory is unknown.
    pub fn open_default() -> Result<Self> {
        let dir = dirs::data_local_dir().ok_or(PrefsError::NoDataDir)?;
        Ok(Self::new(dir.join("readr").join("preferences.toml")))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<PreferencesFile> {
        if !self.path.exists() {
            return Ok(PreferencesFile::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&raw)?)
    }
}

impl PreferenceStore for FilePreferences {
    fn theme(&self) -> Result<Option<ThemeMode>> {
        let file = self.read()?;
        Ok(file.theme.and_then(|raw| match raw.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "ignoring stored theme: {e}");
                None
            }
        }))
    }

    fn set_theme(&mut self, mode: ThemeMode) -> Result<()> {
        let mut file = self.read().unwrap_or_default();
        file.theme = Some(mode.as_str().to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string_pretty(&file)?)?;
        tracing::debug!(path = %self.path.display(), theme = %mode, "saved theme preference");
        Ok(())
    }
}

/// In-memory preference store
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    theme: Option<ThemeMode>,
    writes: usize,
}

impl MemoryPreferences {
    #[must_use]
    pub const fn new(theme: Option<ThemeMode>) -> Self {
        Self { theme, writes: 0 }
    }

    /// Number of `set_theme` calls so far
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryPreferences {
    fn theme(&self) -> Result<Option<ThemeMode>> {
        Ok(self.theme)
    }

    fn set_theme(&mut self, mode: ThemeMode) -> Result<()> {
        self.theme = Some(mode);
        self.writes += 1;
        Ok(())
    }
}
