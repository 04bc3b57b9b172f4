//! Project templates: the one starter artifact layered on top of the core copy.

use serde::{Deserialize, Serialize};

/// A project template from the static catalog.
///
/// The catalog is immutable during a run. A template contributes exactly one
/// starter file; the overlay never touches files produced by the core copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTemplate {
    /// Stable identifier, e.g. `recipe`.
    pub id: String,
    /// Human-readable name, e.g. `Recipe NodePad`.
    pub name: String,
    pub description: String,
    /// Filename of the starter artifact at the project root.
    pub starter_file: String,
}

impl ProjectTemplate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        starter_file: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            starter_file: starter_file.into(),
        }
    }
}

impl std::fmt::Display for ProjectTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.description)
    }
}
