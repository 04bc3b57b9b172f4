//! Unified error handling for gardenfork-core.
//!
//! This module provides a single root error type wrapping domain and
//! application errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::{ApplicationError, SourceError};
use crate::domain::DomainError;

/// Root error type for fork operations.
#[derive(Debug, Error, Clone)]
pub enum ForkError {
    /// Errors from the domain layer (business rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl From<SourceError> for ForkError {
    fn from(err: SourceError) -> Self {
        Self::Application(ApplicationError::Source(err))
    }
}

impl ForkError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in gardenfork".into(),
                "Please report it with the command you ran".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::UserError,
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display and exit-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Network,
    Internal,
}

/// Convenient result type alias.
pub type ForkResult<T> = Result<T, ForkError>;
