//! core::layout
//!
//! On-disk repository layout and the filesystem primitives scoped to it.
//!
//! # Storage Layout
//!
//! All repository state lives under `<work_tree>/.codetrail/`:
//! - `objects/` - reserved for future object storage
//! - `refs/heads/` - branch references
//! - `refs/tags/` - tag references
//! - `description` - human-readable repository description
//! - `HEAD` - symbolic reference to the default branch
//! - `config` - INI-style repository configuration
//!
//! **Hard rule:** no code outside this module may compute
//! `*.join(".codetrail")` paths. All metadata paths go through
//! [`RepositoryLayout`].
//!
//! # Example
//!
//! ```
//! use codetrail::core::layout::RepositoryLayout;
//! use std::path::PathBuf;
//!
//! let layout = RepositoryLayout::new("/repo");
//!
//! assert_eq!(
//!     layout.config_path(),
//!     PathBuf::from("/repo/.codetrail/config")
//! );
//! ```

use std::fs;
use std::path::{Path, PathBuf};

/// Reserved name of the metadata directory inside a work tree.
pub const METADATA_DIR_NAME: &str = ".codetrail";

/// Check whether a directory is a repository root.
///
/// A directory is a repository root iff its metadata directory exists and
/// is itself a directory. Unreadable paths count as non-matches.
pub fn is_repository_root(path: &Path) -> bool {
    path.join(METADATA_DIR_NAME).is_dir()
}

/// The on-disk shape of one repository.
///
/// A layout is a view over the filesystem, constructed on every command
/// invocation and never persisted itself.
///
/// # Invariants
///
/// - `metadata_dir` is always `work_tree/.codetrail`
/// - Construction never touches the filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLayout {
    /// Root directory the user is versioning.
    work_tree: PathBuf,

    /// Fixed-name subdirectory of `work_tree` holding all repository state.
    metadata_dir: PathBuf,
}

impl RepositoryLayout {
    /// Create a layout rooted at the given work tree.
    pub fn new(work_tree: impl Into<PathBuf>) -> Self {
        let work_tree = work_tree.into();
        let metadata_dir = work_tree.join(METADATA_DIR_NAME);
        Self {
            work_tree,
            metadata_dir,
        }
    }

    /// Get the work tree as a Path reference.
    pub fn work_tree(&self) -> &Path {
        &self.work_tree
    }

    /// Get the metadata directory as a Path reference.
    pub fn metadata_dir(&self) -> &Path {
        &self.metadata_dir
    }

    /// Get the absolute work tree path.
    ///
    /// Falls back to the stored path when it cannot be made absolute
    /// (used for notifications only, never for traversal).
    pub fn abs_work_tree(&self) -> PathBuf {
        std::path::absolute(&self.work_tree).unwrap_or_else(|_| self.work_tree.clone())
    }

    /// Get the absolute metadata directory path.
    pub fn abs_metadata_dir(&self) -> PathBuf {
        std::path::absolute(&self.metadata_dir).unwrap_or_else(|_| self.metadata_dir.clone())
    }

    /// Resolve a name relative to the metadata directory.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.metadata_dir.join(relative)
    }

    /// Get the path to the repository configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.resolve("config")
    }

    /// Get the path to the HEAD reference file.
    pub fn head_path(&self) -> PathBuf {
        self.resolve("HEAD")
    }

    /// Get the path to the repository description file.
    pub fn description_path(&self) -> PathBuf {
        self.resolve("description")
    }

    /// Create a directory (and missing parents) under the metadata directory.
    ///
    /// Idempotent: succeeds if the directory already exists.
    pub fn ensure_directory(&self, relative: impl AsRef<Path>) -> std::io::Result<()> {
        fs::create_dir_all(self.resolve(relative))
    }

    /// Create an empty file under the metadata directory if absent.
    ///
    /// Idempotent: an existing file is left untouched.
    pub fn ensure_file(&self, relative: impl AsRef<Path>) -> std::io::Result<()> {
        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.resolve(relative))
            .map(|_| ())
    }

    /// Overwrite a file under the metadata directory with one line of content.
    ///
    /// The written content always ends in exactly one newline, whether or
    /// not the caller's string already carries one.
    pub fn write_file(&self, relative: impl AsRef<Path>, content: &str) -> std::io::Result<()> {
        let line = content.trim_end_matches('\n');
        fs::write(self.resolve(relative), format!("{}\n", line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn metadata_dir_is_under_work_tree() {
        let layout = RepositoryLayout::new("/repo");
        assert_eq!(layout.work_tree(), Path::new("/repo"));
        assert_eq!(layout.metadata_dir(), Path::new("/repo/.codetrail"));
    }

    #[test]
    fn resolve_joins_under_metadata_dir() {
        let layout = RepositoryLayout::new("/repo");
        assert_eq!(
            layout.resolve("refs/heads"),
            PathBuf::from("/repo/.codetrail/refs/heads")
        );
    }

    #[test]
    fn fixed_file_paths() {
        let layout = RepositoryLayout::new("/repo");
        assert_eq!(layout.config_path(), PathBuf::from("/repo/.codetrail/config"));
        assert_eq!(layout.head_path(), PathBuf::from("/repo/.codetrail/HEAD"));
        assert_eq!(
            layout.description_path(),
            PathBuf::from("/repo/.codetrail/description")
        );
    }

    #[test]
    fn ensure_directory_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let layout = RepositoryLayout::new(dir.path());

        layout.ensure_directory("refs/heads").unwrap();
        assert!(layout.resolve("refs/heads").is_dir());

        // Second call succeeds without error
        layout.ensure_directory("refs/heads").unwrap();
    }

    #[test]
    fn ensure_file_creates_empty_file() {
        let dir = TempDir::new().unwrap();
        let layout = RepositoryLayout::new(dir.path());
        layout.ensure_directory(".").unwrap();

        layout.ensure_file("HEAD").unwrap();
        assert!(layout.resolve("HEAD").is_file());
        assert_eq!(fs::read_to_string(layout.head_path()).unwrap(), "");
    }

    #[test]
    fn ensure_file_preserves_existing_content() {
        let dir = TempDir::new().unwrap();
        let layout = RepositoryLayout::new(dir.path());
        layout.ensure_directory(".").unwrap();

        layout.write_file("HEAD", "ref: refs/heads/master").unwrap();
        layout.ensure_file("HEAD").unwrap();

        assert_eq!(
            fs::read_to_string(layout.head_path()).unwrap(),
            "ref: refs/heads/master\n"
        );
    }

    #[test]
    fn write_file_appends_exactly_one_newline() {
        let dir = TempDir::new().unwrap();
        let layout = RepositoryLayout::new(dir.path());
        layout.ensure_directory(".").unwrap();

        layout.write_file("description", "hello").unwrap();
        assert_eq!(
            fs::read_to_string(layout.description_path()).unwrap(),
            "hello\n"
        );

        // Already-terminated content is not double-terminated
        layout.write_file("description", "hello\n").unwrap();
        assert_eq!(
            fs::read_to_string(layout.description_path()).unwrap(),
            "hello\n"
        );
    }

    #[test]
    fn repository_root_requires_metadata_directory() {
        let dir = TempDir::new().unwrap();
        assert!(!is_repository_root(dir.path()));

        fs::create_dir(dir.path().join(METADATA_DIR_NAME)).unwrap();
        assert!(is_repository_root(dir.path()));
    }

    #[test]
    fn metadata_file_is_not_a_repository_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(METADATA_DIR_NAME), "").unwrap();
        assert!(!is_repository_root(dir.path()));
    }
}
