//! tidyname core library: standardize file and directory names in place.
//!
//! `tidyname-core` holds everything except process I/O, so the command-line
//! frontend (`tidyname-cli`) stays a thin loop over input roots.
//!
//! # Modules
//!
//! - [`normalize`] — the name-standardization pipeline ([`Normalizer`]) and filler words ([`VoidWordSet`]).
//! - [`fs`] — entry classification, stem/extension splitting, collision-safe rename, post-order walk ([`TreeWalker`]).
//! - [`config`] — TOML-backed run configuration ([`Config`]) with built-in defaults.
//! - [`event`] — [`Event`]s the walker reports back to the frontend.
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod normalize;

pub use config::settings::{CharClass, Config};
pub use error::{CoreError, CoreResult};
pub use event::{Event, SkipReason};
pub use fs::{ElementOutcome, Entry, EntryKind, NamingRules, TreeWalker, WalkSummary};
pub use normalize::{Normalizer, Stage, VoidWordSet};
