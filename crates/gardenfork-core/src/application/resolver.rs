//! Pattern resolution: expanding the core-pattern list into a copy plan.
//!
//! Resolution performs no writes. The same expansion backs the real copy and
//! the dry-run discovery mode, which is what guarantees the two report the
//! same file counts.

use std::path::Path;

use tracing::debug;

use crate::application::error::ApplicationError;
use crate::application::ports::WorkspaceFs;
use crate::domain::pattern::{CopyPlan, CorePattern, PatternKind, PlanEntry, PlanKind, ResolvedPattern};
use crate::error::ForkResult;

/// Expands patterns against a source root.
pub struct PatternResolver<'a> {
    fs: &'a dyn WorkspaceFs,
}

impl<'a> PatternResolver<'a> {
    pub fn new(fs: &'a dyn WorkspaceFs) -> Self {
        Self { fs }
    }

    /// Expand `patterns` against `source_root` into an ordered plan.
    pub fn expand(&self, patterns: &[CorePattern], source_root: &Path) -> ForkResult<CopyPlan> {
        let mut plan = CopyPlan::default();
        for pattern in patterns {
            let resolved = self.resolve_one(pattern, source_root)?;
            debug!(pattern = %pattern, files = resolved.file_count(), "pattern resolved");
            plan.resolutions.push(resolved);
        }
        Ok(plan)
    }

    fn resolve_one(
        &self,
        pattern: &CorePattern,
        source_root: &Path,
    ) -> ForkResult<ResolvedPattern> {
        let source = source_root.join(&pattern.path);

        match &pattern.kind {
            PatternKind::SingleFile => {
                if self.fs.is_file(&source) {
                    Ok(ResolvedPattern::File {
                        pattern: pattern.clone(),
                        entry: PlanEntry {
                            source,
                            dest: pattern.path.clone().into(),
                            kind: PlanKind::File,
                        },
                    })
                } else {
                    Ok(ResolvedPattern::Missing {
                        pattern: pattern.clone(),
                    })
                }
            }
            PatternKind::WholeDirectory => {
                if self.fs.is_dir(&source) {
                    let file_count = self.fs.walk_files(&source)?.len();
                    Ok(ResolvedPattern::Directory {
                        pattern: pattern.clone(),
                        entry: PlanEntry {
                            source,
                            dest: pattern.path.clone().into(),
                            kind: PlanKind::DirectoryReplace,
                        },
                        file_count,
                    })
                } else {
                    Ok(ResolvedPattern::Missing {
                        pattern: pattern.clone(),
                    })
                }
            }
            PatternKind::RecursiveFiltered { extension } => {
                if !self.fs.is_dir(&source) {
                    return Ok(ResolvedPattern::Missing {
                        pattern: pattern.clone(),
                    });
                }
                let mut entries = Vec::new();
                for file in self.fs.walk_files(&source)? {
                    let matches = file
                        .extension()
                        .and_then(|e| e.to_str())
                        .is_some_and(|e| e.eq_ignore_ascii_case(extension));
                    if !matches {
                        continue;
                    }
                    let dest = file.strip_prefix(source_root).map_err(|_| {
                        ApplicationError::Filesystem {
                            path: file.clone(),
                            reason: "walked file escaped the source root".into(),
                        }
                    })?;
                    entries.push(PlanEntry {
                        dest: dest.to_path_buf(),
                        source: file,
                        kind: PlanKind::File,
                    });
                }
                Ok(ResolvedPattern::Filtered {
                    pattern: pattern.clone(),
                    entries,
                })
            }
        }
    }
}
