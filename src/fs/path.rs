//! Path resolution helpers.

use crate::error::FsError;
use std::path::{Path, PathBuf};

/// Resolve a path to an absolute path.
///
/// Relative paths are joined against the current working directory. No
/// filesystem access is performed, so the result may name a path that does
/// not exist yet.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            // cwd unavailable (deleted, permissions): fall back to the path
            // as given so downstream I/O reports the real error.
            Err(_) => path.to_path_buf(),
        }
    }
}

/// Canonicalize an existing path.
///
/// Uses `dunce` so Windows results stay in legacy (non-UNC) form. Fails if
/// the path does not exist.
pub fn canonicalize_existing(path: &Path) -> Result<PathBuf, FsError> {
    dunce::canonicalize(path)
        .map_err(|e| FsError::InvalidPath(format!("Failed to canonicalize {}: {}", path.display(), e)))
}
