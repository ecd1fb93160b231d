//! Log setup
//!
//! The TUI owns the terminal, so log records go to
//! `<data dir>/readr/readr.log` instead. `READR_LOG` takes the usual
//! `EnvFilter` directives and defaults to `readr=info`.

use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "READR_LOG";

const DEFAULT_FILTER: &str = "readr=info";
const LOG_FILE: &str = "readr.log";

/// Directory the log file is written to
#[must_use]
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("readr"))
}

/// Filter from `READR_LOG`, falling back to `readr=info`
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `dir/readr.log`
///
/// Keep the returned guard alive for the life of the program; dropping it
/// flushes and stops the background writer.
///
/// # Errors
///
/// Returns a message if the directory cannot be created or a global
/// subscriber is already installed.
pub fn init(dir: &Path) -> Result<WorkerGuard, String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create log directory {}: {e}", dir.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(rolling::never(dir, LOG_FILE));

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| format!("Failed to install log subscriber: {e}"))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_is_under_readr() {
        if let Some(dir) = log_dir() {
            assert!(dir.ends_with("readr"));
        }
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<tracing_subscriber::filter::Directive>().is_ok());
    }
}
