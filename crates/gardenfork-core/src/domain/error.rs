//! Domain layer errors.
//!
//! Business-rule violations only. Orchestration and infrastructure failures
//! live in `application::error`.

use thiserror::Error;

/// Errors raised by domain validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Project name failed validation.
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: my-garden, recipe_box, planner2".into(),
            ],
        }
    }
}
