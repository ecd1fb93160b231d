//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for readr using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive reader (default)
//! - **books**: Print the server's book list
//! - **chapters**: Print a book's chapters and details
//! - **read**: Print one chapter
//! - **config**: Get and set configuration values
//!
//! # Examples
//!
//! ```
//! use readr::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["readr", "read", "Dune", "3"]);
//! assert!(matches!(cli.get_command(), Commands::Read { chapter: 3, .. }));
//! ```

use clap::{Parser, Subcommand};

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., server_url=http://localhost:8000)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., server_url)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "readr")]
#[command(about = "A terminal reader for a remote book library", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Book server to use instead of the configured one
    #[arg(long = "server", value_name = "URL", global = true)]
    pub server: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive reader (default)
    #[command(visible_alias = "b")]
    Browse,

    /// List the books on the server
    #[command(visible_alias = "ls")]
    Books,

    /// List the chapters of a book
    Chapters {
        /// Book name as listed by `readr books`
        #[arg(value_name = "BOOK")]
        book: String,
    },

    /// Print the text of one chapter
    Read {
        /// Book name as listed by `readr books`
        #[arg(value_name = "BOOK")]
        book: String,

        /// Chapter number, starting at 1
        #[arg(value_name = "CHAPTER", value_parser = clap::value_parser!(u32).range(1..))]
        chapter: u32,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl PartialEq for ConfigCommands {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Set { setting: a }, Self::Set { setting: b }) => a == b,
            (Self::Get { key: a }, Self::Get { key: b }) => a == b,
            _ => false,
        }
    }
}

impl Eq for ConfigCommands {}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_browse() {
        let cli = Cli::parse_from(["readr"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.get_command(), Commands::Browse);
    }

    #[test]
    fn test_explicit_browse() {
        let cli = Cli::parse_from(["readr", "b"]);
        assert_eq!(cli.command, Some(Commands::Browse));
    }

    #[test]
    fn test_parse_chapters() {
        let cli = Cli::parse_from(["readr", "chapters", "War and Peace"]);
        assert_eq!(
            cli.get_command(),
            Commands::Chapters {
                book: "War and Peace".to_string()
            }
        );
    }

    #[test]
    fn test_parse_read() {
        let cli = Cli::parse_from(["readr", "read", "Dune", "12"]);
        assert_eq!(
            cli.get_command(),
            Commands::Read {
                book: "Dune".to_string(),
                chapter: 12
            }
        );
    }

    #[test]
    fn test_read_rejects_chapter_zero() {
        assert!(Cli::try_parse_from(["readr", "read", "Dune", "0"]).is_err());
        assert!(Cli::try_parse_from(["readr", "read", "Dune", "one"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["readr", "books", "-q", "--server", "http://h:1"]);
        assert!(cli.quiet);
        assert_eq!(cli.server.as_deref(), Some("http://h:1"));
        assert_eq!(cli.get_command(), Commands::Books);
    }

    #[test]
    fn test_config_set() {
        let cli = Cli::parse_from(["readr", "config", "set", "quiet=true"]);
        assert_eq!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::Set {
                    setting: "quiet=true".to_string()
                }
            }
        );
    }
}
