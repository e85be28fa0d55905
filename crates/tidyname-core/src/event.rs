//! Notifications from the tree walker to its caller.
//!
//! The walker reports what it did through [`Event`]s, delivered in the order
//! things happen (children before their parent). A frontend decides what to
//! print; the core never writes to stdout.

use std::fmt;
use std::path::PathBuf;

/// Why an entry was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing printable survived standardization.
    EmptyName,
    /// The name is not valid UTF-8.
    NonUtf8Name,
    /// The path has no final component (e.g. `/`).
    NoName,
    /// Socket, FIFO, device node.
    SpecialFile,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::EmptyName => "standardized name is empty",
            SkipReason::NonUtf8Name => "name is not valid UTF-8",
            SkipReason::NoName => "path has no file name",
            SkipReason::SpecialFile => "not a regular file, directory or symlink",
        };
        f.write_str(text)
    }
}

/// A notification the core sends back to the frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// An entry was renamed.
    Renamed {
        /// The path before the rename.
        from: PathBuf,
        /// The path actually used, disambiguation included.
        to: PathBuf,
    },
    /// An entry was visited but deliberately not renamed.
    Skipped {
        path: PathBuf,
        reason: SkipReason,
    },
    /// Renaming one entry failed; the walk went on with its siblings.
    ElementFailed {
        path: PathBuf,
        /// The error message.
        error: String,
    },
}
