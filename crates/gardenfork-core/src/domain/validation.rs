//! Project-name validation rules.

use super::error::DomainError;

/// Validate a destination project name.
///
/// Names become directory names, so path separators and hidden-file prefixes
/// are rejected outright rather than sanitized.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProjectName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(invalid(
            "only alphanumeric characters, '-' and '_' are allowed",
        ));
    }
    Ok(())
}
