//! core
//!
//! Core domain types and operations for Codetrail.
//!
//! # Modules
//!
//! - [`commands`] - Validated command objects consumed by core operations
//! - [`config`] - Scoped repository configuration store
//! - [`discover`] - Repository discovery (upward and downward searches)
//! - [`init`] - Repository initialization
//! - [`layout`] - On-disk repository layout and filesystem primitives
//! - [`repository`] - Repository aggregate (layout + configuration)
//!
//! # Design Principles
//!
//! - Validation happens at construction time; invalid values cannot be represented
//! - Discovery is read-only; only initialization and `config set`/`unset` mutate
//! - Recoverable failures are explicit [`CoreError`] variants, not panics

pub mod commands;
pub mod config;
pub mod discover;
pub mod init;
pub mod layout;
pub mod repository;

use std::path::PathBuf;

use thiserror::Error;

/// Errors from core repository operations.
///
/// Every variant except [`CoreError::Io`] is recoverable at the command
/// dispatch boundary: handlers report it as a single error line and return
/// normally. I/O errors propagate as fatal.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A repository already exists at or around the target path.
    #[error("found an existing repository at {}. Exiting!", .0.display())]
    ExistingRepository(PathBuf),

    /// The target path exists but is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Strict construction against a path lacking the metadata directory.
    #[error("not a repository: {}", .0.display())]
    NotARepository(PathBuf),

    /// The metadata directory exists but the configuration file does not.
    #[error("missing configuration file: {}", .0.display())]
    MissingConfigFile(PathBuf),

    /// The configuration key does not follow the `section.option` form.
    #[error("invalid config key '{0}', expected '<section>.<option>'")]
    InvalidConfigKey(String),

    /// The configuration section is not in the recognized set.
    #[error("invalid section '{given}'!, choose from '{allowed}'")]
    UnsupportedSection { given: String, allowed: String },

    /// The configuration option is not in the recognized set.
    #[error("invalid option '{given}'!, choose from '{allowed}'")]
    UnsupportedOption { given: String, allowed: String },

    /// A recognized key that holds no value in the configuration file.
    #[error("configuration key '{0}' is not set")]
    ConfigValueNotFound(String),

    /// An underlying filesystem error. Not recoverable.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Whether the dispatch layer should catch this error and report it as
    /// a single message instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CoreError::Io(_))
    }
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
