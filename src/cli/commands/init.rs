//! init command - Initialize a new repository

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::cli::commands::report;
use crate::cli::Context;
use crate::core::commands::InitializeRepository;
use crate::core::init::initialize_repository;

/// Initialize a repository at `path`, or at the starting directory when no
/// path is given.
pub fn init(ctx: &Context, path: Option<&Path>) -> Result<()> {
    let start = ctx.start_dir()?;
    let target = match path {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => start.join(path),
        None => start,
    };

    info!("Initializing a new repository.");
    let command = InitializeRepository::new(target);
    report(initialize_repository(&command))
}
