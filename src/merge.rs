//! Non-overwriting directory merge.
//!
//! Copies the contents of a source directory tree into a destination
//! directory tree without ever overwriting a file that already exists in the
//! destination. An empty destination takes a bulk-copy shortcut; a non-empty
//! destination is merged entry by entry with path-existence checks only (no
//! checksum or modification-time comparison, so a stale destination file is
//! never refreshed).
//!
//! Single-writer assumed: concurrent merges into overlapping destinations
//! can race on the existence checks.

use crate::error::FsError;
use crate::fs::ops::{self, copy_entry, ensure_dir, is_empty_dir, list_entries, tree_entries};
use crate::fs::path::canonicalize_existing;
use std::fs;
use std::path::{Path, PathBuf};

/// Merge the contents of `source_dir` into `dest_dir`.
///
/// The destination is created (with parents) if absent. Relative paths are
/// resolved against the current working directory. The source directory must
/// exist; if it does not, the error from the first filesystem call that
/// touches it is returned as-is.
///
/// Returns the resolved absolute path of the destination root. A failure
/// partway through leaves the destination in whatever partial state had been
/// reached; there is no rollback.
pub fn merge(source_dir: &Path, dest_dir: &Path) -> Result<PathBuf, FsError> {
    let dest_root = ensure_dir(dest_dir)?;
    let source_root = canonicalize_existing(source_dir)?;

    tracing::debug!(
        "Merging {} into {}",
        source_root.display(),
        dest_root.display()
    );

    if is_empty_dir(&dest_root)? {
        bulk_copy(&source_root, &dest_root)?;
    } else {
        selective_merge(&source_root, &dest_root)?;
    }

    Ok(dest_root)
}

/// Copy every top-level entry of the source into the destination.
///
/// Taken only when the destination starts completely empty, so no existence
/// checks are needed.
fn bulk_copy(source_root: &Path, dest_root: &Path) -> Result<(), FsError> {
    for entry in list_entries(source_root)? {
        copy_entry(&entry, dest_root)?;
    }
    Ok(())
}

/// Walk the source tree and copy each entry whose counterpart is missing
/// under the destination. Existing destination files are left untouched.
fn selective_merge(source_root: &Path, dest_root: &Path) -> Result<(), FsError> {
    for source_entry in tree_entries(source_root)? {
        let rel = source_entry.strip_prefix(source_root).map_err(|_| {
            FsError::InvalidPath(format!(
                "Entry escaped source root: {}",
                source_entry.display()
            ))
        })?;
        let dest_entry = dest_root.join(rel);

        if source_entry.is_dir() {
            if !dest_entry.exists() {
                // create_dir_all covers missing parents, including the
                // destination root itself.
                fs::create_dir_all(&dest_entry).map_err(|e| {
                    tracing::error!("Failed to create directory {}: {}", dest_entry.display(), e);
                    FsError::CreateDir {
                        path: dest_entry.clone(),
                        source: e,
                    }
                })?;
            }
        } else if !dest_entry.exists() {
            if let Some(parent) = dest_entry.parent() {
                if !parent.exists() {
                    ensure_dir(parent)?;
                }
            }
            ops::copy_file(&source_entry, &dest_entry)?;
        }
    }
    Ok(())
}
