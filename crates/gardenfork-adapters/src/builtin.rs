//! Built-in core-pattern list and template catalog.
//!
//! Static configuration consumed by the resolver and overlay. Both are
//! immutable during a fork.

use gardenfork_core::domain::{CorePattern, ProjectTemplate};

/// The core files every forked project inherits from the garden.
pub fn core_patterns() -> Vec<CorePattern> {
    vec![
        CorePattern::directory("contexts"),
        CorePattern::file("toolshed/nodepad-4.0.0.html"),
        CorePattern::directory("generated"),
        CorePattern::directory("module-generators"),
        CorePattern::directory("sunflower"),
        CorePattern::file("CONTRIBUTING.md"),
        CorePattern::file("README.md"),
        CorePattern::file("requirements.txt"),
        CorePattern::file(".gitignore"),
    ]
}

/// The project-template catalog.
pub fn templates() -> Vec<ProjectTemplate> {
    vec![
        ProjectTemplate::new(
            "recipe",
            "Recipe NodePad",
            "Recipe management with hierarchical ingredients and 4x6 printing",
            "recipe-nodepad.html",
        ),
        ProjectTemplate::new(
            "budget",
            "Budget NodePad",
            "Financial planning with Grassroots structure",
            "budget-nodepad.html",
        ),
        ProjectTemplate::new(
            "planning",
            "Planning NodePad",
            "PDA-friendly project planning",
            "planning-nodepad.html",
        ),
        ProjectTemplate::new(
            "sailing",
            "Sailing Tools",
            "Marine navigation with Apple Watch integration",
            "sailing-tools.html",
        ),
        ProjectTemplate::new(
            "nodepad",
            "Pure NodePad",
            "Clean NodePad for any domain",
            "nodepad.html",
        ),
    ]
}

/// Look up one template by id.
pub fn find_template(id: &str) -> Option<ProjectTemplate> {
    templates().into_iter().find(|t| t.id == id)
}

/// All template ids, for error messages.
pub fn template_ids() -> Vec<String> {
    templates().into_iter().map(|t| t.id).collect()
}
