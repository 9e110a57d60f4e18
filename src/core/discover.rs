//! core::discover
//!
//! Read-only repository discovery.
//!
//! Two searches back the nesting invariant:
//!
//! - [`find_enclosing_repository`] walks upward from a starting path and
//!   returns the nearest repository root at or above it. The user's home
//!   directory is the traversal ceiling: it is checked itself, but the walk
//!   never continues above it.
//! - [`find_descendant_repository`] walks downward (depth-first) and returns
//!   any repository root inside the subtree. It is used only to veto
//!   initialization, so any match suffices.
//!
//! Both searches never mutate the filesystem, and both treat unreadable
//! directories as non-matches rather than failing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::layout;

/// Find the nearest repository root at or above `start`.
///
/// Returns the first repository root found walking from `start` toward the
/// filesystem root, with `start` itself taking priority over ancestors.
/// Returns `None` when the home directory is reached without a match (the
/// home directory itself is still checked) or when the filesystem root is
/// exhausted.
pub fn find_enclosing_repository(start: &Path) -> Option<PathBuf> {
    find_enclosing_with_ceiling(start, dirs::home_dir().as_deref())
}

/// Upward search with an explicit ceiling, for callers that control the
/// traversal boundary directly.
pub fn find_enclosing_with_ceiling(start: &Path, ceiling: Option<&Path>) -> Option<PathBuf> {
    // Anchor relative starting points so the parent walk climbs real
    // ancestors. Canonicalize when the path exists; a not-yet-created init
    // target is only made absolute.
    let mut current = start.canonicalize().unwrap_or_else(|_| {
        std::path::absolute(start).unwrap_or_else(|_| start.to_path_buf())
    });
    // Compare like with like: the walk below runs over canonical paths.
    let ceiling = ceiling.map(|c| c.canonicalize().unwrap_or_else(|_| c.to_path_buf()));

    loop {
        if layout::is_repository_root(&current) {
            return Some(current);
        }
        if ceiling.as_deref().is_some_and(|c| current == c) {
            return None;
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Find any repository root strictly below `start`.
///
/// Walks the subtree depth-first, visiting directories only. Returns the
/// first repository root encountered, or `None` when the subtree holds no
/// repository. Unreadable directories are skipped.
pub fn find_descendant_repository(start: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(start).ok()?;

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if layout::is_repository_root(&path) {
            return Some(path);
        }
        if let Some(found) = find_descendant_repository(&path) {
            return Some(found);
        }
    }

    None
}
