//! Collision-safe renaming.
//!
//! When the desired name is taken, a disambiguation suffix is appended to
//! the stem (or its counter bumped) until a free name turns up. Existing
//! entries are never overwritten.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::name::NamingRules;
use crate::fs::ops::{entry_exists, rename_entry};

/// Finds a free path for `stem + extension` inside `dir`.
///
/// Returns the desired path itself when it is free. The extension is kept
/// as-is on every candidate; only the stem is disambiguated.
///
/// # Errors
///
/// [`CoreError::CollisionExhausted`] when more than
/// [`NamingRules::max_attempts`] candidates are taken.
pub fn resolve_target(
    dir: &Path,
    stem: &str,
    extension: &str,
    rules: &NamingRules,
) -> CoreResult<PathBuf> {
    let desired = dir.join(format!("{stem}{extension}"));
    let mut candidate = desired.clone();
    let mut candidate_stem = stem.to_string();
    let mut attempts = 0;

    while entry_exists(&candidate) {
        if attempts >= rules.max_attempts() {
            return Err(CoreError::CollisionExhausted {
                path: desired,
                attempts,
            });
        }
        attempts += 1;
        candidate_stem = rules.next_candidate(&candidate_stem);
        candidate = dir.join(format!("{candidate_stem}{extension}"));
        tracing::debug!("name taken, trying {}", candidate.display());
    }

    Ok(candidate)
}

/// Renames `source` to `stem + extension` in its own directory, picking a
/// disambiguated name if needed. Returns the path actually used.
///
/// # Errors
///
/// - [`CoreError::CollisionExhausted`] if no free name was found.
/// - [`CoreError::RenameConflict`] if the chosen name was taken between
///   the check and the rename.
/// - Any error of [`rename_entry`].
pub fn safe_rename(
    source: &Path,
    stem: &str,
    extension: &str,
    rules: &NamingRules,
) -> CoreResult<PathBuf> {
    let dir = source.parent().ok_or_else(|| {
        CoreError::InvalidName(format!("no parent directory for {}", source.display()))
    })?;
    let target = resolve_target(dir, stem, extension, rules)?;
    rename_entry(source, &target)?;
    Ok(target)
}
