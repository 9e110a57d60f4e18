//! cli
//!
//! Command-line interface layer for Codetrail.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Construct validated command objects and delegate to [`crate::core`]
//! - Report recoverable domain errors as single-line messages
//!
//! The CLI layer is thin: it never walks the filesystem or mutates a
//! repository itself.

pub mod args;
pub mod commands;

pub use args::{Cli, Command, ConfigAction};

use std::path::PathBuf;

use anyhow::Result;

/// Execution context derived from global CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Directory to run in; `None` means the process working directory.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Errors-only output.
    pub quiet: bool,
}

impl Context {
    /// Resolve the directory commands should start from.
    pub fn start_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

/// Run a parsed CLI invocation.
///
/// This is the main entry point called from `main.rs`; logging setup has
/// already happened there.
pub fn run(cli: Cli) -> Result<()> {
    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}
