//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves the starting directory from the context
//! 2. Builds a validated command object
//! 3. Calls the core operation
//! 4. Catches recoverable domain errors and reports a single error line
//!
//! Handlers do NOT perform repository mutations directly. Recoverable
//! errors (nesting conflicts, unsupported keys, missing repositories) end
//! the command normally after one message; unexpected I/O errors propagate
//! as fatal.

mod config_cmd;
mod init;

pub use config_cmd::{get as config_get, list as config_list, set as config_set,
    unset as config_unset};
pub use init::init;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use anyhow::Result;
use tracing::error;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Init { path } => init(ctx, path.as_deref()),
        Command::Config { action } => match action {
            ConfigAction::Set { key, value } => config_set(ctx, &key, &value),
            ConfigAction::Get { key } => config_get(ctx, &key),
            ConfigAction::List => config_list(ctx),
            ConfigAction::Unset { key } => config_unset(ctx, &key),
        },
    }
}

/// Report a recoverable core error and swallow it; let fatal ones through.
///
/// This is the single place where the dispatch layer decides what "ends the
/// command with one message" versus what aborts the process.
pub(crate) fn report(result: crate::core::Result<()>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_recoverable() => {
            error!("{}", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
