//! Config command - get and set configuration values

use crate::{
    cli::ConfigCommands,
    config::{KEYS, ReadrConfig},
    ui::Notifier,
    ReadrError,
};
use std::io::Write;

type Result<T> = std::result::Result<T, ReadrError>;

/// Apply a config subcommand to `config`
///
/// Returns `true` if `config` changed and needs saving.
///
/// # Errors
/// Returns `ReadrError::InvalidInput` for a malformed `KEY=VALUE` and
/// `ReadrError::ConfigError` for unknown keys or invalid values.
pub fn execute(
    config: &mut ReadrConfig,
    command: &ConfigCommands,
    out: &mut dyn Write,
    messages: &dyn Notifier,
) -> Result<bool> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                ReadrError::InvalidInput(format!(
                    "Expected KEY=VALUE, got '{setting}'. Keys: {}",
                    KEYS.join(", ")
                ))
            })?;
            let key = key.trim();
            config.set_value(key, value)?;
            messages.success(&format!("Set {key} = {}", config.get_value(key)?));
            Ok(true)
        }
        ConfigCommands::Get { key } => {
            writeln!(out, "{}", config.get_value(key.trim())?)?;
            Ok(false)
        }
    }
}
