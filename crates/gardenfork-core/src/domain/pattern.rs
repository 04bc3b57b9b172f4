//! Core patterns and the copy plan they expand into.
//!
//! A [`CorePattern`] is a path specifier naming the files every forked
//! project inherits from the source tree. The resolver expands the pattern
//! list against a concrete source root into a [`CopyPlan`]: an ordered list
//! of per-pattern resolutions that both the copier and the dry-run discovery
//! mode consume, so both report identical file counts.

use std::path::PathBuf;

/// How a pattern's path is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternKind {
    /// A single file, copied if present.
    SingleFile,
    /// A directory copied recursively; the destination subtree is replaced,
    /// never merged.
    WholeDirectory,
    /// A directory subtree from which only files with the given extension
    /// are copied, preserving their relative paths.
    RecursiveFiltered { extension: String },
}

/// One entry of the fixed core-file configuration.
///
/// The pattern list is read-only during a fork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorePattern {
    /// Path relative to the source root. Directories carry no trailing slash.
    pub path: String,
    pub kind: PatternKind,
}

impl CorePattern {
    /// Single-file pattern.
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: normalize(path.into()),
            kind: PatternKind::SingleFile,
        }
    }

    /// Whole-directory pattern (atomic replacement on copy).
    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: normalize(path.into()),
            kind: PatternKind::WholeDirectory,
        }
    }

    /// Recursive pattern filtered to one file extension (without the dot).
    pub fn filtered(path: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            path: normalize(path.into()),
            kind: PatternKind::RecursiveFiltered {
                extension: extension.into().trim_start_matches('.').to_string(),
            },
        }
    }
}

fn normalize(path: String) -> String {
    path.trim_end_matches('/').to_string()
}

impl std::fmt::Display for CorePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            PatternKind::SingleFile => write!(f, "{}", self.path),
            PatternKind::WholeDirectory => write!(f, "{}/", self.path),
            PatternKind::RecursiveFiltered { extension } => {
                write!(f, "{}/**/*.{}", self.path, extension)
            }
        }
    }
}

// ── Copy plan ─────────────────────────────────────────────────────────────────

/// How one plan entry is applied by the copier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanKind {
    /// Copy one file, creating parent directories.
    File,
    /// Replace the destination subtree with the source subtree.
    DirectoryReplace,
}

/// A single (absolute source, destination-relative) copy instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    /// Absolute path under the source root.
    pub source: PathBuf,
    /// Path relative to the destination project root.
    pub dest: PathBuf,
    pub kind: PlanKind,
}

/// Resolution of one pattern against a source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedPattern {
    /// `SingleFile` found.
    File { pattern: CorePattern, entry: PlanEntry },
    /// `WholeDirectory` found; `file_count` is the number of files beneath it.
    Directory {
        pattern: CorePattern,
        entry: PlanEntry,
        file_count: usize,
    },
    /// `RecursiveFiltered` expanded; may be empty (a warning, not an error).
    Filtered {
        pattern: CorePattern,
        entries: Vec<PlanEntry>,
    },
    /// Pattern path absent from the source root (non-fatal).
    Missing { pattern: CorePattern },
}

impl ResolvedPattern {
    /// Number of files this resolution would copy.
    pub fn file_count(&self) -> usize {
        match self {
            Self::File { .. } => 1,
            Self::Directory { file_count, .. } => *file_count,
            Self::Filtered { entries, .. } => entries.len(),
            Self::Missing { .. } => 0,
        }
    }

    pub fn pattern(&self) -> &CorePattern {
        match self {
            Self::File { pattern, .. }
            | Self::Directory { pattern, .. }
            | Self::Filtered { pattern, .. }
            | Self::Missing { pattern } => pattern,
        }
    }
}

/// Ordered expansion of the full pattern list.
///
/// Produced without any filesystem writes, so it backs both the real copy and
/// the dry-run discovery operation.
#[derive(Debug, Clone, Default)]
pub struct CopyPlan {
    pub resolutions: Vec<ResolvedPattern>,
}

impl CopyPlan {
    /// Total files a copy of this plan would produce.
    pub fn file_count(&self) -> usize {
        self.resolutions.iter().map(ResolvedPattern::file_count).sum()
    }

    /// Patterns that resolved to nothing.
    pub fn missing(&self) -> impl Iterator<Item = &CorePattern> {
        self.resolutions.iter().filter_map(|r| match r {
            ResolvedPattern::Missing { pattern } => Some(pattern),
            _ => None,
        })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
