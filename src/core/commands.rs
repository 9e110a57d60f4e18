//! core::commands
//!
//! Validated command objects.
//!
//! Commands carry the data a core operation needs, validated at
//! construction time: a command that would reference an unrecognized
//! configuration key cannot be built at all. The CLI layer constructs
//! these and hands them to [`crate::core::init`] and
//! [`crate::core::config`].

use std::path::PathBuf;

use crate::core::config::ConfigKey;
use crate::core::Result;

/// Command to initialize a repository at a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializeRepository {
    /// The work tree the repository will be created in.
    pub path: PathBuf,
}

impl InitializeRepository {
    /// Create the command. Any path is accepted; the initializer itself
    /// enforces the nesting and directory-type invariants.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Command to set a configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetConfig {
    /// The validated key the value is stored under.
    pub key: ConfigKey,
    /// The value to set.
    pub value: String,
}

impl SetConfig {
    /// Build the command from a dotted key and a value.
    ///
    /// # Errors
    ///
    /// Fails when the key is malformed or names an unrecognized
    /// section or option; see [`ConfigKey::parse`].
    pub fn new(key: &str, value: impl Into<String>) -> Result<Self> {
        Ok(Self {
            key: ConfigKey::parse(key)?,
            value: value.into(),
        })
    }
}

/// Command to read a configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetConfig {
    /// The validated key to look up.
    pub key: ConfigKey,
}

impl GetConfig {
    /// Build the command from a dotted key.
    pub fn new(key: &str) -> Result<Self> {
        Ok(Self {
            key: ConfigKey::parse(key)?,
        })
    }
}

/// Command to remove a configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsetConfig {
    /// The validated key to remove.
    pub key: ConfigKey,
}

impl UnsetConfig {
    /// Build the command from a dotted key.
    pub fn new(key: &str) -> Result<Self> {
        Ok(Self {
            key: ConfigKey::parse(key)?,
        })
    }
}

/// Command to list every configuration entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListConfig;
