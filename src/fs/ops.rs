//! Directory and file primitives used by the merge routine.

use crate::error::FsError;
use crate::fs::path::{absolutize, canonicalize_existing};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Create a directory (and any missing parents), resolving relative paths
/// against the current working directory.
///
/// Idempotent: an already-existing directory is a no-op success. Returns the
/// resolved absolute path of the directory.
pub fn ensure_dir(path: &Path) -> Result<PathBuf, FsError> {
    let abs = absolutize(path);
    tracing::debug!("Creating directory {}", abs.display());

    if let Err(e) = fs::create_dir_all(&abs) {
        tracing::error!("Failed to create directory {}: {}", abs.display(), e);
        return Err(FsError::CreateDir {
            path: abs,
            source: e,
        });
    }

    Ok(abs)
}

/// Non-recursive listing of a directory's top-level entries.
///
/// Returns full paths sorted by name for determinism.
pub fn list_entries(path: &Path) -> Result<Vec<PathBuf>, FsError> {
    let read_dir = fs::read_dir(path).map_err(|e| FsError::ReadDir {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| FsError::ReadDir {
            path: path.to_path_buf(),
            source: e,
        })?;
        entries.push(entry.path());
    }
    entries.sort();
    Ok(entries)
}

/// Whether a directory has zero top-level entries.
pub fn is_empty_dir(path: &Path) -> Result<bool, FsError> {
    Ok(list_entries(path)?.is_empty())
}

/// Recursive listing of every file and directory under `root`, excluding
/// `root` itself.
///
/// Directories and files are intermixed, sorted by path, so a directory
/// always precedes its own contents. Symbolic links are not followed.
pub fn tree_entries(root: &Path) -> Result<Vec<PathBuf>, FsError> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry?;
        if entry.path() == root {
            continue;
        }
        entries.push(entry.path().to_path_buf());
    }
    entries.sort();
    Ok(entries)
}

/// Copy a file or directory (recursively) into a destination directory.
///
/// The entry keeps its file name: `copy_entry("/a/b", "/dest")` produces
/// `/dest/b`. The destination directory must already exist.
pub fn copy_entry(source: &Path, dest_dir: &Path) -> Result<(), FsError> {
    let name = source.file_name().ok_or_else(|| {
        FsError::InvalidPath(format!("Path has no file name: {}", source.display()))
    })?;
    let target = dest_dir.join(name);

    if source.is_dir() {
        copy_tree(source, &target)
    } else {
        copy_file(source, &target)
    }
}

/// Copy a single file to an exact target path.
pub(crate) fn copy_file(source: &Path, target: &Path) -> Result<(), FsError> {
    fs::copy(source, target).map_err(|e| FsError::Copy {
        from: source.to_path_buf(),
        to: target.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Recursively copy a directory to an exact target path.
fn copy_tree(source: &Path, target: &Path) -> Result<(), FsError> {
    fs::create_dir_all(target).map_err(|e| FsError::CreateDir {
        path: target.to_path_buf(),
        source: e,
    })?;

    for entry in tree_entries(source)? {
        let rel = entry
            .strip_prefix(source)
            .map_err(|_| FsError::InvalidPath(format!("Entry escaped root: {}", entry.display())))?;
        let dest = target.join(rel);
        if entry.is_dir() {
            fs::create_dir_all(&dest).map_err(|e| FsError::CreateDir {
                path: dest.clone(),
                source: e,
            })?;
        } else {
            copy_file(&entry, &dest)?;
        }
    }
    Ok(())
}

/// Modification time of a file in nanoseconds since the Unix epoch.
pub fn mod_time_ns(path: &Path) -> Result<u128, FsError> {
    let canonical = canonicalize_existing(path)?;
    let modified = fs::metadata(&canonical)?.modified()?;
    let since_epoch = modified
        .duration_since(std::time::UNIX_EPOCH)
        .map_err(|e| FsError::InvalidPath(format!("Modification time before epoch: {}", e)))?;
    Ok(since_epoch.as_nanos())
}

/// Whether an executable with the given name exists on `$PATH`.
pub fn command_exists(name: &str) -> bool {
    which::which(name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_creates_nested_path() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("c");

        let created = ensure_dir(&nested).unwrap();
        assert!(created.is_dir());
        assert!(created.is_absolute());
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("twice");

        let first = ensure_dir(&dir).unwrap();
        let second = ensure_dir(&dir).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_list_entries_sorted() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("z.txt"), "z").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp_dir.path().join("m")).unwrap();

        let entries = list_entries(temp_dir.path()).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].ends_with("a.txt"));
        assert!(entries[1].ends_with("m"));
        assert!(entries[2].ends_with("z.txt"));
    }

    #[test]
    fn test_is_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(is_empty_dir(temp_dir.path()).unwrap());

        fs::write(temp_dir.path().join("file"), "x").unwrap();
        assert!(!is_empty_dir(temp_dir.path()).unwrap());
    }

    #[test]
    fn test_tree_entries_excludes_root_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub").join("inner.txt"), "x").unwrap();
        fs::write(root.join("top.txt"), "y").unwrap();

        let entries = tree_entries(root).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(!entries.contains(&root.to_path_buf()));

        // Directory precedes its contents.
        let sub_idx = entries.iter().position(|p| p.ends_with("sub")).unwrap();
        let inner_idx = entries.iter().position(|p| p.ends_with("inner.txt")).unwrap();
        assert!(sub_idx < inner_idx);
    }

    #[test]
    fn test_copy_entry_file() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        let file = src_dir.path().join("data.txt");
        fs::write(&file, "payload").unwrap();

        copy_entry(&file, dest_dir.path()).unwrap();
        let copied = dest_dir.path().join("data.txt");
        assert_eq!(fs::read_to_string(copied).unwrap(), "payload");
    }

    #[test]
    fn test_copy_entry_directory_recursive() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        let tree = src_dir.path().join("tree");
        fs::create_dir_all(tree.join("deep")).unwrap();
        fs::write(tree.join("deep").join("leaf.txt"), "leaf").unwrap();

        copy_entry(&tree, dest_dir.path()).unwrap();
        let copied = dest_dir.path().join("tree").join("deep").join("leaf.txt");
        assert_eq!(fs::read_to_string(copied).unwrap(), "leaf");
    }

    #[test]
    fn test_mod_time_ns_is_recent() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("stamp.txt");
        fs::write(&file, "x").unwrap();

        let ns = mod_time_ns(&file).unwrap();
        // Sometime after 2020-01-01.
        assert!(ns > 1_577_836_800_000_000_000);
    }

    #[test]
    fn test_command_exists() {
        assert!(command_exists("ls") || command_exists("cmd"));
        assert!(!command_exists("definitely-not-a-real-command-xyz"));
    }
}
