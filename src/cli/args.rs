//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Errors only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Codetrail - a CLI for tracking code history
#[derive(Parser, Debug)]
#[command(name = "codetrail")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if codetrail was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; only errors are reported
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new, empty repository
    #[command(
        long_about = "Initialize a new, empty repository.\n\n\
            Creates the .codetrail metadata directory with its fixed skeleton. \
            Initialization is refused when the target is already inside a \
            repository or contains one anywhere below it."
    )]
    Init {
        /// Where to create the repository (defaults to the current directory)
        path: Option<PathBuf>,
    },

    /// Manage repository configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Set a configuration value
    Set {
        /// Configuration key as '<section>.<option>', e.g. 'user.name'
        key: String,
        /// The value to store
        value: String,
    },

    /// Print a configuration value
    Get {
        /// Configuration key as '<section>.<option>'
        key: String,
    },

    /// List every configuration entry
    List,

    /// Remove a configuration value
    Unset {
        /// Configuration key as '<section>.<option>'
        key: String,
    },
}
