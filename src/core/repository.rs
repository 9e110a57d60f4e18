//! core::repository
//!
//! The repository aggregate: a layout plus access to its configuration.
//!
//! Construction comes in two modes. [`Repository::open`] is strict and
//! requires the metadata directory to already exist; it is what every
//! normal command uses. [`Repository::prepare`] builds the aggregate
//! before anything exists on disk and is used only during initialization.

use std::path::{Path, PathBuf};

use crate::core::config::ConfigStore;
use crate::core::discover;
use crate::core::layout::{self, RepositoryLayout};
use crate::core::{CoreError, Result};

/// One repository: a work tree and its metadata directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    layout: RepositoryLayout,
}

impl Repository {
    /// Open the repository rooted at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotARepository`] when `path` has no metadata
    /// directory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !layout::is_repository_root(&path) {
            return Err(CoreError::NotARepository(path));
        }
        Ok(Self {
            layout: RepositoryLayout::new(path),
        })
    }

    /// Build the aggregate for a repository that may not exist yet.
    pub fn prepare(path: impl Into<PathBuf>) -> Self {
        Self {
            layout: RepositoryLayout::new(path),
        }
    }

    /// Open the repository enclosing `start`.
    ///
    /// Walks upward from `start` to find the nearest repository root; when
    /// none is found, `start` itself is tried so the error names the path
    /// the user actually gave.
    pub fn discover(start: &Path) -> Result<Self> {
        let root =
            discover::find_enclosing_repository(start).unwrap_or_else(|| start.to_path_buf());
        Self::open(root)
    }

    /// Get the repository layout.
    pub fn layout(&self) -> &RepositoryLayout {
        &self.layout
    }

    /// Load the repository's configuration store.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingConfigFile`] when the metadata directory
    /// exists but the `config` file does not.
    pub fn config_store(&self) -> Result<ConfigStore> {
        ConfigStore::load(self.layout.config_path())
    }
}
