//! Post-order standardization of a directory tree.
//!
//! Children are always renamed before the directory that holds them: the
//! paths captured when a directory is listed stay valid only as long as the
//! directory itself keeps its name. The walk uses an explicit stack, so
//! tree depth is not limited by the call stack.

use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use crate::config::settings::{Config, WalkConfig};
use crate::error::{CoreError, CoreResult};
use crate::event::{Event, SkipReason};
use crate::fs::collision::safe_rename;
use crate::fs::entry::{Entry, EntryKind};
use crate::fs::name::NamingRules;
use crate::fs::ops::list_children;
use crate::normalize::Normalizer;

/// What happened to a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementOutcome {
    /// The name is already standard.
    Unchanged,
    Renamed { from: PathBuf, to: PathBuf },
    Skipped(SkipReason),
}

/// Counters for one root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub visited: usize,
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
    /// The event callback asked to stop before the tree was finished.
    pub stopped: bool,
}

enum Frame {
    /// Not yet looked at.
    Enter(Entry),
    /// A directory whose children are all done.
    Leave(Entry),
}

/// Standardizes every entry under a root.
///
/// Holds the immutable run configuration; build it once and reuse it for
/// every root.
#[derive(Debug, Clone)]
pub struct TreeWalker {
    normalizer: Normalizer,
    naming: NamingRules,
    skip_hidden: bool,
}

impl TreeWalker {
    pub fn new(normalizer: Normalizer, naming: NamingRules, walk: &WalkConfig) -> Self {
        Self {
            normalizer,
            naming,
            skip_hidden: walk.skip_hidden,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Normalizer::from_config(&config.normalize),
            NamingRules::from_config(&config.naming),
            &config.walk,
        )
    }

    /// Standardizes `root` and, if it is a directory, everything below it.
    ///
    /// `on_event` receives one [`Event`] per rename, skip or element failure,
    /// in the order they happen. Returning [`ControlFlow::Break`] from it
    /// stops the walk after that event; the summary then has `stopped` set.
    /// Symlinks are renamed but never followed.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidInputPath`] if `root` does not exist.
    /// - [`CoreError::RenameConflict`] and I/O errors abort the walk; renames
    ///   already done stay done.
    ///
    /// [`CoreError::CollisionExhausted`] is not returned: it is reported as
    /// [`Event::ElementFailed`] and the walk continues.
    pub fn standardize_tree<F>(&self, root: &Path, mut on_event: F) -> CoreResult<WalkSummary>
    where
        F: FnMut(Event) -> ControlFlow<()>,
    {
        let root_entry = Entry::from_path(root).map_err(|e| match e {
            CoreError::NotFound(path) => CoreError::InvalidInputPath(path),
            other => other,
        })?;

        let mut summary = WalkSummary::default();
        let mut stack = vec![Frame::Enter(root_entry)];

        while let Some(frame) = stack.pop() {
            let flow = match frame {
                Frame::Enter(entry) => {
                    summary.visited += 1;
                    tracing::debug!("visiting {}", entry.path().display());
                    match entry.kind() {
                        EntryKind::Directory => {
                            let children = list_children(entry.path())?;
                            stack.push(Frame::Leave(entry));
                            for child in children.into_iter().rev() {
                                if self.skip_hidden && child.is_hidden() {
                                    tracing::debug!("skipping hidden {}", child.path().display());
                                    continue;
                                }
                                stack.push(Frame::Enter(child));
                            }
                            ControlFlow::Continue(())
                        }
                        EntryKind::File | EntryKind::Symlink { .. } => {
                            self.finish(&entry, &mut summary, &mut on_event)?
                        }
                        EntryKind::Other => {
                            tracing::warn!("skipping special file {}", entry.path().display());
                            summary.skipped += 1;
                            on_event(Event::Skipped {
                                path: entry.path().to_path_buf(),
                                reason: SkipReason::SpecialFile,
                            })
                        }
                    }
                }
                Frame::Leave(entry) => self.finish(&entry, &mut summary, &mut on_event)?,
            };
            if flow.is_break() {
                tracing::warn!("walk of {} stopped before completion", root.display());
                summary.stopped = true;
                break;
            }
        }

        Ok(summary)
    }

    fn finish<F>(
        &self,
        entry: &Entry,
        summary: &mut WalkSummary,
        on_event: &mut F,
    ) -> CoreResult<ControlFlow<()>>
    where
        F: FnMut(Event) -> ControlFlow<()>,
    {
        let flow = match self.standardize_element(entry) {
            Ok(ElementOutcome::Unchanged) => ControlFlow::Continue(()),
            Ok(ElementOutcome::Renamed { from, to }) => {
                summary.renamed += 1;
                on_event(Event::Renamed { from, to })
            }
            Ok(ElementOutcome::Skipped(reason)) => {
                summary.skipped += 1;
                on_event(Event::Skipped {
                    path: entry.path().to_path_buf(),
                    reason,
                })
            }
            Err(err @ CoreError::CollisionExhausted { .. }) => {
                tracing::error!("{err}");
                summary.failed += 1;
                on_event(Event::ElementFailed {
                    path: entry.path().to_path_buf(),
                    error: err.to_string(),
                })
            }
            Err(err) => return Err(err),
        };
        Ok(flow)
    }

    /// Standardizes the name of a single entry, renaming it if it changes.
    ///
    /// The name is split into stem and extension (directories keep their
    /// whole name unless it ends in a bundle extension); only the stem is
    /// standardized.
    pub fn standardize_element(&self, entry: &Entry) -> CoreResult<ElementOutcome> {
        let Some(name) = entry.name() else {
            let reason = if entry.has_non_utf8_name() {
                tracing::warn!("skipping non-UTF-8 name {}", entry.path().display());
                SkipReason::NonUtf8Name
            } else {
                SkipReason::NoName
            };
            return Ok(ElementOutcome::Skipped(reason));
        };

        let (stem, extension) = self.naming.split(name, entry.splits_as_dir());
        let new_stem = self.normalizer.standardize(stem);
        if new_stem == stem {
            return Ok(ElementOutcome::Unchanged);
        }
        if new_stem.is_empty() {
            tracing::warn!(
                "not renaming {}: standardized name is empty",
                entry.path().display()
            );
            return Ok(ElementOutcome::Skipped(SkipReason::EmptyName));
        }

        let to = safe_rename(entry.path(), &new_stem, extension, &self.naming)?;
        tracing::info!("renamed {} -> {}", entry.path().display(), to.display());
        Ok(ElementOutcome::Renamed {
            from: entry.path().to_path_buf(),
            to,
        })
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
