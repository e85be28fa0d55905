//! Filesystem entry classification.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// What kind of object an entry is, without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// A symbolic link. `to_dir` records whether its target is a directory.
    Symlink { to_dir: bool },
    /// Sockets, FIFOs, device nodes.
    Other,
}

/// A single file or directory entry seen during a walk.
///
/// `Entry` is immutable. The name is the raw last path component; it is
/// `None` when the path has no final component (`/`) or the component is
/// not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    name: Option<String>,
    kind: EntryKind,
    is_hidden: bool,
}

impl Entry {
    /// Creates an `Entry` from a path and its `symlink_metadata`.
    ///
    /// Hidden entries are detected by a leading `.` in the name.
    pub fn new(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        let file_type = metadata.file_type();
        let kind = if file_type.is_symlink() {
            EntryKind::Symlink {
                to_dir: path.is_dir(),
            }
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string);
        let is_hidden = name.as_deref().is_some_and(|n| n.starts_with('.'));

        Self {
            path,
            name,
            kind,
            is_hidden,
        }
    }

    /// Reads the metadata for `path` (not following symlinks) and classifies it.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if nothing exists at `path`.
    /// - [`CoreError::PermissionDenied`] / [`CoreError::Io`] otherwise.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let metadata = std::fs::symlink_metadata(path).map_err(|e| CoreError::from_io(path, e))?;
        Ok(Self::new(path.to_path_buf(), &metadata))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The UTF-8 base name, if there is one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` when the path has a final component that is not UTF-8.
    pub fn has_non_utf8_name(&self) -> bool {
        self.name.is_none() && self.path.file_name().is_some()
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns `true` for a real directory (never for a symlink to one).
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    /// Whether the name should be split like a directory's, i.e. without
    /// peeling off an extension. Symlinks to directories count.
    pub fn splits_as_dir(&self) -> bool {
        matches!(
            self.kind,
            EntryKind::Directory | EntryKind::Symlink { to_dir: true }
        )
    }
}
