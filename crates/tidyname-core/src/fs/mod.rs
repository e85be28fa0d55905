//! File system side of tidyname.
//!
//! Entries are classified without following symlinks ([`entry::Entry`]),
//! names are split into stem and extension ([`name::NamingRules`]), renames
//! never clobber existing entries ([`collision::safe_rename`]), and whole
//! trees are processed children-first ([`walk::TreeWalker`]).

pub mod collision;
pub mod entry;
pub mod name;
pub mod ops;
pub mod walk;

pub use collision::{resolve_target, safe_rename};
pub use entry::{Entry, EntryKind};
pub use name::{split_extension, NamingRules};
pub use ops::{entry_exists, list_children, rename_entry};
pub use walk::{ElementOutcome, TreeWalker, WalkSummary};
