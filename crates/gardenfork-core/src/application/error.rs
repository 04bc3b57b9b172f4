//! Application layer errors.
//!
//! Orchestration and infrastructure failures. Business-rule violations are
//! `DomainError` from `crate::domain`. Every variant here is structural and
//! fatal: the engine aborts and cleans up. Content-level failures (a missing
//! pattern, one file failing to copy) are `CopyOutcome`s, not errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Failures while resolving a source root.
#[derive(Debug, Error, Clone)]
pub enum SourceError {
    /// No candidate directory carried the marker and no valid explicit path
    /// was supplied.
    #[error("no template source found (searched {} location(s))", searched.len())]
    NotFound { searched: Vec<PathBuf> },

    /// Transport failure or non-success HTTP status on the archive fetch.
    #[error("network failure fetching {url}: {reason}")]
    Network { url: String, reason: String },

    /// Downloaded archive could not be unpacked.
    #[error("archive is corrupt: {reason}")]
    ArchiveCorrupt { reason: String },

    /// Archive exceeded the configured size cap.
    #[error("archive exceeds the {limit_bytes} byte limit")]
    ArchiveTooLarge { limit_bytes: u64 },

    /// Extraction yielded zero or multiple candidate top-level directories.
    #[error("expected one extracted directory matching '{expected_prefix}*', found {found}")]
    AmbiguousExtraction { expected_prefix: String, found: usize },
}

/// Errors that occur during fork orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Source root resolution failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Destination project directory already exists and overwrite was not
    /// confirmed.
    #[error("destination already exists at {path}")]
    DestinationExists { path: PathBuf },

    /// A filesystem operation the fork cannot proceed without failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The fork record could not be written. A fork without a record is
    /// indistinguishable from garbage, so this aborts the fork.
    #[error("failed to write fork record at {path}: {reason}")]
    MetadataWrite { path: PathBuf, reason: String },

    /// A fork record could not be read or parsed.
    #[error("failed to read fork record at {path}: {reason}")]
    MetadataRead { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Source(SourceError::NotFound { searched }) => {
                let mut out = vec!["No garden source tree was found".to_string()];
                for p in searched {
                    out.push(format!("  searched: {}", p.display()));
                }
                out.push("Pass an explicit path with --source <DIR>".into());
                out.push("Or fetch from the repository with --remote".into());
                out
            }
            Self::Source(SourceError::Network { .. }) => vec![
                "Check your network connection".into(),
                "Verify the repository and branch exist".into(),
            ],
            Self::Source(SourceError::ArchiveCorrupt { .. }) => vec![
                "The downloaded archive could not be unpacked".into(),
                "Retry the download; the transfer may have been truncated".into(),
            ],
            Self::Source(SourceError::ArchiveTooLarge { .. }) => vec![
                "Raise the limit with remote.max_archive_mb in the config file".into(),
            ],
            Self::Source(SourceError::AmbiguousExtraction { .. }) => vec![
                "The archive layout was not the expected <repo>-<branch>/ tree".into(),
                "Check that the configured repository serves standard branch archives".into(),
            ],
            Self::DestinationExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Use --force to replace it (destructive)".into(),
                "Or choose a different project name".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::MetadataWrite { .. } => vec![
                "The fork was rolled back; no partial project was left behind".into(),
                "Check write permissions on the destination".into(),
            ],
            Self::MetadataRead { path, .. } => vec![
                format!("Record file: {}", path.display()),
                "The directory may not be a gardenfork project".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Source(SourceError::NotFound { .. }) => ErrorCategory::NotFound,
            Self::Source(_) => ErrorCategory::Network,
            Self::DestinationExists { .. } => ErrorCategory::UserError,
            Self::Filesystem { .. } | Self::MetadataWrite { .. } => ErrorCategory::Internal,
            Self::MetadataRead { .. } => ErrorCategory::NotFound,
        }
    }
}
