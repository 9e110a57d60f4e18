//! core::config
//!
//! Scoped repository configuration.
//!
//! # Overview
//!
//! Configuration entries are identified by a dotted `section.option` key and
//! persisted as INI-style text in the repository's `config` file. Both the
//! section and the option must belong to fixed, closed sets; anything else
//! is rejected before the file is touched.
//!
//! # Recognized keys
//!
//! | Section | Options |
//! |---------|---------|
//! | `user`  | `name`  |
//!
//! # Operation shape
//!
//! Every operation shares the same preamble: resolve the repository around
//! the starting path (strict - the config file must already exist), parse
//! the file, then validate, mutate, and persist as needed. Validation always
//! checks the section before the option, so an invalid section wins even
//! when the option is also invalid.
//!
//! # Example
//!
//! ```no_run
//! use codetrail::core::commands::SetConfig;
//! use codetrail::core::config;
//! use std::path::Path;
//!
//! let command = SetConfig::new("user.name", "Chill Guy").unwrap();
//! config::set(Path::new("."), &command).unwrap();
//! ```

mod ini;

pub use ini::ConfigDocument;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::commands::{GetConfig, SetConfig, UnsetConfig};
use crate::core::repository::Repository;
use crate::core::{CoreError, Result};

/// The closed set of recognized configuration sections.
pub const CONFIG_SECTIONS: &[&str] = &["user"];

/// The closed set of recognized configuration options.
///
/// One global set for now; per-section sets become worthwhile once a second
/// section exists.
pub const CONFIG_OPTIONS: &[&str] = &["name"];

/// A validated `section.option` configuration key.
///
/// Splitting happens on the first `.`: the section is everything before it
/// and the option everything after, so `user.na.me` yields the option
/// `na.me` (which then fails closed-set validation). A `ConfigKey` can only
/// be constructed from a recognized section/option pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigKey {
    section: String,
    option: String,
}

impl ConfigKey {
    /// Parse and validate a dotted key.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidConfigKey`] when the key has no `.` separator
    /// - [`CoreError::UnsupportedSection`] when the section is unrecognized
    /// - [`CoreError::UnsupportedOption`] when the option is unrecognized
    pub fn parse(key: &str) -> Result<Self> {
        let Some((section, option)) = key.split_once('.') else {
            return Err(CoreError::InvalidConfigKey(key.to_string()));
        };

        if !CONFIG_SECTIONS.contains(&section) {
            return Err(CoreError::UnsupportedSection {
                given: section.to_string(),
                allowed: CONFIG_SECTIONS.join(", "),
            });
        }
        if !CONFIG_OPTIONS.contains(&option) {
            return Err(CoreError::UnsupportedOption {
                given: option.to_string(),
                allowed: CONFIG_OPTIONS.join(", "),
            });
        }

        Ok(Self {
            section: section.to_string(),
            option: option.to_string(),
        })
    }

    /// Get the section name.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Get the option name.
    pub fn option(&self) -> &str {
        &self.option
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.option)
    }
}

/// A loaded configuration file scoped to one repository.
///
/// Mutating operations rewrite the whole file; the parse → mutate →
/// serialize round trip preserves existing section and option order.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    document: ConfigDocument,
}

impl ConfigStore {
    /// Load the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingConfigFile`] when the file does not exist.
    pub fn load(path: PathBuf) -> Result<Self> {
        if !path.is_file() {
            return Err(CoreError::MissingConfigFile(path));
        }
        let content = fs::read_to_string(&path)?;
        Ok(Self {
            path,
            document: ConfigDocument::parse(&content),
        })
    }

    /// Look up the value for a key.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ConfigValueNotFound`] when the key is recognized
    /// but holds no value in the file.
    pub fn get(&self, key: &ConfigKey) -> Result<&str> {
        self.document
            .get(key.section(), key.option())
            .ok_or_else(|| CoreError::ConfigValueNotFound(key.to_string()))
    }

    /// Set the value for a key and persist the file.
    pub fn set(&mut self, key: &ConfigKey, value: &str) -> Result<()> {
        self.document.set(key.section(), key.option(), value);
        self.persist()
    }

    /// Remove a key if present and persist the file.
    ///
    /// Removing a key that was never set is a no-op, not an error.
    pub fn unset(&mut self, key: &ConfigKey) -> Result<()> {
        self.document.unset(key.section(), key.option());
        self.persist()
    }

    /// Enumerate every `section.option = value` pair in file order.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.document
            .entries()
            .map(|(section, option, value)| (format!("{}.{}", section, option), value.to_string()))
            .collect()
    }

    fn persist(&self) -> Result<()> {
        fs::write(&self.path, self.document.serialize())?;
        Ok(())
    }
}

/// Set a configuration value in the repository around `start`.
pub fn set(start: &Path, command: &SetConfig) -> Result<()> {
    let repository = Repository::discover(start)?;
    let mut store = repository.config_store()?;
    store.set(&command.key, &command.value)?;
    info!("Set value '{}' on key '{}'.", command.value, command.key);
    Ok(())
}

/// Get a configuration value from the repository around `start`.
pub fn get(start: &Path, command: &GetConfig) -> Result<String> {
    let repository = Repository::discover(start)?;
    let store = repository.config_store()?;
    let value = store.get(&command.key)?.to_string();
    info!("{} = {}", command.key, value);
    Ok(value)
}

/// List every configuration entry in the repository around `start`.
pub fn list(start: &Path) -> Result<Vec<(String, String)>> {
    let repository = Repository::discover(start)?;
    let store = repository.config_store()?;
    let entries = store.entries();
    for (key, value) in &entries {
        info!("{} = {}", key, value);
    }
    Ok(entries)
}

/// Remove a configuration value from the repository around `start`.
pub fn unset(start: &Path, command: &UnsetConfig) -> Result<()> {
    let repository = Repository::discover(start)?;
    let mut store = repository.config_store()?;
    store.unset(&command.key)?;
    info!("Unset key '{}'.", command.key);
    Ok(())
}
