//! Directory listing and non-clobbering rename.

use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::Entry;

/// Reads the immediate contents of a directory as [`Entry`] values.
///
/// Entries are classified without following symlinks and returned sorted
/// by file name, so walks are reproducible. Children that vanish between
/// listing and `lstat` are skipped.
///
/// # Errors
///
/// - [`CoreError::NotFound`] — the path does not exist.
/// - [`CoreError::NotADirectory`] — the path is not a directory.
/// - [`CoreError::PermissionDenied`] — read access is denied.
/// - [`CoreError::Io`] — any other I/O error.
pub fn list_children(path: &Path) -> CoreResult<Vec<Entry>> {
    let meta = std::fs::symlink_metadata(path).map_err(|e| CoreError::from_io(path, e))?;
    if !meta.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| CoreError::from_io(path, e))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("skipping unreadable entry in {}: {e}", path.display());
                continue;
            }
        };
        let metadata = match std::fs::symlink_metadata(dir_entry.path()) {
            Ok(m) => m,
            Err(_) => continue,
        };
        entries.push(Entry::new(dir_entry.path(), &metadata));
    }

    entries.sort_by(|a, b| a.path().file_name().cmp(&b.path().file_name()));
    Ok(entries)
}

/// Returns `true` if anything, including a dangling symlink, occupies `path`.
pub fn entry_exists(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

/// Renames `from` to `to` without ever replacing an existing entry.
///
/// `to` must stay in an existing directory and its final component must be
/// a valid file name. The existence check and the rename are not atomic;
/// the tree is assumed to have a single writer.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `from` does not exist.
/// - [`CoreError::InvalidName`] if the new name is invalid.
/// - [`CoreError::RenameConflict`] if `to` already exists.
/// - [`CoreError::Io`] for any I/O failure.
pub fn rename_entry(from: &Path, to: &Path) -> CoreResult<()> {
    if !entry_exists(from) {
        return Err(CoreError::NotFound(from.to_path_buf()));
    }

    let new_name = to
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CoreError::InvalidName(to.display().to_string()))?;
    if !is_valid_filename(new_name) {
        return Err(CoreError::InvalidName(new_name.to_string()));
    }

    if entry_exists(to) {
        return Err(CoreError::RenameConflict {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
    }

    std::fs::rename(from, to).map_err(|e| CoreError::from_io(from, e))
}

fn is_valid_filename(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    if name.contains('/') || name.contains('\0') {
        return false;
    }
    #[cfg(windows)]
    if name.contains('\\') || name.contains(':') {
        return false;
    }
    true
}
