//! Error types for `tidyname-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`. Text normalization itself
//! never fails: characters that cannot be folded are dropped.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to report
/// which entry was affected and why.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// A root given on input does not resolve to an existing entry.
    #[error("invalid input path: {0}")]
    InvalidInputPath(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to something else.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The rename target exists even though collision resolution picked it as free.
    #[error("rename conflict: {} already exists (renaming {})", .to.display(), .from.display())]
    RenameConflict {
        /// The entry being renamed.
        from: PathBuf,
        /// The target that turned out to be taken.
        to: PathBuf,
    },

    /// No free disambiguated name was found within the attempt bound.
    #[error("no free name for {} after {attempts} attempts", .path.display())]
    CollisionExhausted {
        /// The originally desired target path.
        path: PathBuf,
        /// How many candidates were tried.
        attempts: usize,
    },

    /// A computed file or directory name is invalid (empty, contains path separators, etc.).
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Maps an I/O error on `path` to the most specific variant.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(err),
        }
    }
}

/// Convenience alias used throughout `tidyname-core`.
pub type CoreResult<T> = Result<T, CoreError>;
