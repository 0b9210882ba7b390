//! Path helpers.

use std::path::{Path, PathBuf};

/// Canonicalize when possible, otherwise return the input unchanged.
/// Deleted files still need a stable key in the watcher.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
