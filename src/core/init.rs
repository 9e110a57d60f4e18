//! core::init
//!
//! Repository initialization.
//!
//! Creates a new, empty repository while protecting the invariant that no
//! repository is ever nested inside another, in either direction. The
//! nesting checks run before any filesystem mutation, so a rejected
//! initialization leaves the target exactly as it was.

use tracing::info;

use crate::core::commands::InitializeRepository;
use crate::core::discover;
use crate::core::layout::RepositoryLayout;
use crate::core::repository::Repository;
use crate::core::{CoreError, Result};

/// Default content of the `description` file.
pub const DEFAULT_REPOSITORY_DESCRIPTION: &str =
    "Unnamed repository; edit this file 'description' to name the repository.";

/// Default content of the `HEAD` file.
pub const DEFAULT_REPOSITORY_HEAD: &str = "ref: refs/heads/master";

/// Initialize a new, empty repository.
///
/// Preconditions, checked in order before anything is created:
///
/// 1. No repository at or above the target (else
///    [`CoreError::ExistingRepository`]).
/// 2. When the target already exists it must be a directory (else
///    [`CoreError::NotADirectory`]) and its subtree must hold no
///    repository (else [`CoreError::ExistingRepository`]).
///
/// Once the preconditions pass, the target is created if missing and the
/// fixed skeleton is laid down. Filesystem errors past that point
/// propagate as [`CoreError::Io`]; there is no rollback.
pub fn initialize_repository(command: &InitializeRepository) -> Result<()> {
    if let Some(existing) = discover::find_enclosing_repository(&command.path) {
        return Err(CoreError::ExistingRepository(existing));
    }

    let repository = Repository::prepare(&command.path);
    let layout = repository.layout();

    if layout.work_tree().exists() {
        if !layout.work_tree().is_dir() {
            return Err(CoreError::NotADirectory(layout.work_tree().to_path_buf()));
        }
        if let Some(existing) = discover::find_descendant_repository(layout.work_tree()) {
            return Err(CoreError::ExistingRepository(existing));
        }
    } else {
        std::fs::create_dir_all(layout.work_tree())?;
    }

    make_initial_directories(layout)?;
    make_initial_files(layout)?;
    write_initial_content(layout)?;

    info!(
        "Initialized new repository at {}.",
        layout.abs_work_tree().display()
    );
    info!(
        "New codetrail directory at {}.",
        layout.abs_metadata_dir().display()
    );
    Ok(())
}

/// Create the fixed directory skeleton under the metadata directory.
fn make_initial_directories(layout: &RepositoryLayout) -> Result<()> {
    layout.ensure_directory("objects")?;
    layout.ensure_directory("refs/tags")?;
    layout.ensure_directory("refs/heads")?;
    Ok(())
}

/// Create the fixed file skeleton under the metadata directory.
fn make_initial_files(layout: &RepositoryLayout) -> Result<()> {
    layout.ensure_file("description")?;
    layout.ensure_file("HEAD")?;
    layout.ensure_file("config")?;
    Ok(())
}

/// Write default content into the files that carry any.
///
/// `config` stays empty; values only appear through `config set`.
fn write_initial_content(layout: &RepositoryLayout) -> Result<()> {
    layout.write_file("description", DEFAULT_REPOSITORY_DESCRIPTION)?;
    layout.write_file("HEAD", DEFAULT_REPOSITORY_HEAD)?;
    Ok(())
}
