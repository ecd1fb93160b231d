//! Readr CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Open the interactive reader (default command)
//! readr
//! readr browse
//!
//! # Plain output for scripting
//! readr books
//! readr chapters "Dune"
//! readr read "Dune" 3
//!
//! # Use another server for one run
//! readr --server http://10.0.0.2:8000 books
//!
//! # Configuration
//! readr config set server_url=http://books.local:8000
//! readr config get request_timeout_secs
//! ```
//!
//! # Configuration
//!
//! On first run, readr will prompt for the server URL. Configuration is
//! stored in the user's config directory (`~/.config/readr/config.toml` on
//! Linux). Logs go to `readr.log` in the user's data directory; set
//! `READR_LOG` (e.g. `READR_LOG=readr=debug`) to change the level.

use readr::{
    api::{BookApi, HttpApi},
    cli::{Cli, Commands},
    commands,
    config::ReadrConfig,
    logging,
    ui::{ConsoleNotifier, Notifier},
    ReadrError,
};
use std::io;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ReadrError>;

/// Build the HTTP client for the configured or overridden server
fn connect(config: &ReadrConfig, server: Option<&str>) -> Result<Arc<dyn BookApi>> {
    let server_url = server.unwrap_or(&config.server_url);
    let api = HttpApi::new(server_url, config.request_timeout())?;
    tracing::info!(server = %api.base_url(), "using book server");
    Ok(Arc::new(api))
}

/// Main entry point for the readr application
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let mut config = ReadrConfig::load_or_setup()?;

    let quiet = cli.quiet || config.quiet;
    let messages = ConsoleNotifier::new(quiet);

    let _log_guard = match logging::log_dir()
        .ok_or_else(|| ReadrError::Logging("Could not determine data directory".into()))
        .and_then(|dir| logging::init(&dir).map_err(ReadrError::Logging))
    {
        Ok(guard) => Some(guard),
        Err(e) => {
            messages.warning(&format!("{e}; continuing without a log file"));
            None
        }
    };

    let command = cli.get_command();
    let mut stdout = io::stdout().lock();

    match &command {
        Commands::Config { command } => {
            if commands::config(&mut config, command, &mut stdout, &messages)? {
                config.save()?;
            }
        }
        Commands::Browse => {
            let api = connect(&config, cli.server.as_deref())?;
            drop(stdout);
            commands::browse(api, &config)?;
        }
        Commands::Books => {
            let api = connect(&config, cli.server.as_deref())?;
            commands::books(api.as_ref(), &mut stdout, quiet)?;
        }
        Commands::Chapters { book } => {
            let api = connect(&config, cli.server.as_deref())?;
            commands::chapters(api.as_ref(), book, &mut stdout, quiet)?;
        }
        Commands::Read { book, chapter } => {
            let api = connect(&config, cli.server.as_deref())?;
            commands::read(api.as_ref(), book, *chapter, &mut stdout, quiet)?;
        }
    }

    Ok(())
}
