//! Plan execution: copying resolved entries into the destination.
//!
//! A failure on one entry is recorded as `Failed` and processing continues
//! with the remaining entries. Aborting the whole fork on a structural
//! failure is the engine's decision, not the copier's.

use std::path::Path;

use tracing::{debug, warn};

use crate::application::ports::WorkspaceFs;
use crate::domain::outcome::{CopyOutcome, CopyResult};
use crate::domain::pattern::{CopyPlan, PlanEntry, ResolvedPattern};
use crate::error::ForkResult;

/// Applies a [`CopyPlan`] to a destination root.
pub struct Copier<'a> {
    fs: &'a dyn WorkspaceFs,
}

impl<'a> Copier<'a> {
    pub fn new(fs: &'a dyn WorkspaceFs) -> Self {
        Self { fs }
    }

    /// Execute the plan, copying files under `dest_root`.
    ///
    /// Destination subtrees for whole-directory entries are deleted before
    /// copying; the result is reproducible from the source root and pattern
    /// list alone, never a merge with pre-existing content.
    pub fn apply(&self, plan: &CopyPlan, dest_root: &Path) -> CopyResult {
        let mut result = CopyResult::default();

        for resolved in &plan.resolutions {
            let outcome = match resolved {
                ResolvedPattern::File { pattern, entry } => {
                    match self.copy_entry(entry, dest_root) {
                        Ok(()) => CopyOutcome::CopiedFile {
                            pattern: pattern.clone(),
                        },
                        Err(e) => CopyOutcome::Failed {
                            pattern: pattern.clone(),
                            reason: e.to_string(),
                        },
                    }
                }
                ResolvedPattern::Directory { pattern, entry, .. } => {
                    match self.replace_directory(entry, dest_root) {
                        Ok(files) => CopyOutcome::CopiedDirectory {
                            pattern: pattern.clone(),
                            files,
                        },
                        Err(e) => CopyOutcome::Failed {
                            pattern: pattern.clone(),
                            reason: e.to_string(),
                        },
                    }
                }
                ResolvedPattern::Filtered { pattern, entries } => {
                    let (copied, failures) = self.copy_all(entries, dest_root);
                    if failures.is_empty() {
                        CopyOutcome::CopiedDirectory {
                            pattern: pattern.clone(),
                            files: copied,
                        }
                    } else {
                        CopyOutcome::Failed {
                            pattern: pattern.clone(),
                            reason: format!(
                                "{copied} of {} files copied: {}",
                                entries.len(),
                                failures.join("; ")
                            ),
                        }
                    }
                }
                ResolvedPattern::Missing { pattern } => CopyOutcome::Missing {
                    pattern: pattern.clone(),
                },
            };

            if matches!(outcome, CopyOutcome::Failed { .. }) {
                warn!(%outcome, "copy entry failed, continuing");
            } else {
                debug!(%outcome, "copy entry done");
            }
            result.push(outcome);
        }

        result
    }

    fn copy_entry(&self, entry: &PlanEntry, dest_root: &Path) -> ForkResult<()> {
        let dest = dest_root.join(&entry.dest);
        if let Some(parent) = dest.parent() {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.copy_file(&entry.source, &dest)
    }

    /// Delete-then-copy a whole subtree. Never merges.
    fn replace_directory(&self, entry: &PlanEntry, dest_root: &Path) -> ForkResult<usize> {
        let dest_dir = dest_root.join(&entry.dest);
        if self.fs.exists(&dest_dir) {
            self.fs.remove_dir_all(&dest_dir)?;
        }
        self.fs.create_dir_all(&dest_dir)?;

        let mut copied = 0;
        for file in self.fs.walk_files(&entry.source)? {
            let rel = file.strip_prefix(&entry.source).map_err(|_| {
                crate::application::error::ApplicationError::Filesystem {
                    path: file.clone(),
                    reason: "walked file escaped the source directory".into(),
                }
            })?;
            let dest = dest_dir.join(rel);
            if let Some(parent) = dest.parent() {
                self.fs.create_dir_all(parent)?;
            }
            self.fs.copy_file(&file, &dest)?;
            copied += 1;
        }
        Ok(copied)
    }

    /// Copy every entry, continuing past failures. Returns the number of
    /// files written and the reasons for any that were not.
    fn copy_all(&self, entries: &[PlanEntry], dest_root: &Path) -> (usize, Vec<String>) {
        let mut copied = 0;
        let mut failures = Vec::new();
        for entry in entries {
            match self.copy_entry(entry, dest_root) {
                Ok(()) => copied += 1,
                Err(e) => failures.push(format!("{}: {e}", entry.source.display())),
            }
        }
        (copied, failures)
    }
}

/// Build the [`CopyResult`] a real copy of `plan` would produce, without any
/// writes. This is the discovery/dry-run operation.
pub fn discover(plan: &CopyPlan) -> CopyResult {
    let mut result = CopyResult::default();
    for resolved in &plan.resolutions {
        let outcome = match resolved {
            ResolvedPattern::File { pattern, .. } => CopyOutcome::CopiedFile {
                pattern: pattern.clone(),
            },
            ResolvedPattern::Directory {
                pattern,
                file_count,
                ..
            } => CopyOutcome::CopiedDirectory {
                pattern: pattern.clone(),
                files: *file_count,
            },
            ResolvedPattern::Filtered { pattern, entries } => CopyOutcome::CopiedDirectory {
                pattern: pattern.clone(),
                files: entries.len(),
            },
            ResolvedPattern::Missing { pattern } => CopyOutcome::Missing {
                pattern: pattern.clone(),
            },
        };
        result.push(outcome);
    }
    result
}
