//! Per-pattern copy outcomes and the aggregate result.

use super::pattern::CorePattern;

/// Status of one pattern after the copier (or discovery mode) processed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Single file copied.
    CopiedFile { pattern: CorePattern },
    /// Directory subtree copied; `files` is the number of files beneath it.
    CopiedDirectory { pattern: CorePattern, files: usize },
    /// Pattern absent from the source root. Non-fatal.
    Missing { pattern: CorePattern },
    /// Copy attempted but failed. Non-fatal; remaining entries still run.
    Failed { pattern: CorePattern, reason: String },
}

impl CopyOutcome {
    pub fn files_copied(&self) -> usize {
        match self {
            Self::CopiedFile { .. } => 1,
            Self::CopiedDirectory { files, .. } => *files,
            Self::Missing { .. } | Self::Failed { .. } => 0,
        }
    }
}

impl std::fmt::Display for CopyOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CopiedFile { pattern } => write!(f, "copied {pattern}"),
            Self::CopiedDirectory { pattern, files } => {
                write!(f, "copied {pattern} ({files} files)")
            }
            Self::Missing { pattern } => write!(f, "not found: {pattern}"),
            Self::Failed { pattern, reason } => write!(f, "failed {pattern}: {reason}"),
        }
    }
}

/// Ordered outcome list plus a total-files counter.
///
/// Produced by the real copy and, with identical counts, by the no-write
/// discovery mode.
#[derive(Debug, Clone, Default)]
pub struct CopyResult {
    outcomes: Vec<CopyOutcome>,
    total_files: usize,
}

impl CopyResult {
    pub fn push(&mut self, outcome: CopyOutcome) {
        self.total_files += outcome.files_copied();
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[CopyOutcome] {
        &self.outcomes
    }

    pub fn total_files(&self) -> usize {
        self.total_files
    }

    pub fn missing_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, CopyOutcome::Missing { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, CopyOutcome::Failed { .. }))
            .count()
    }
}
