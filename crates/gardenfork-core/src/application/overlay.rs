//! Template overlay: materializing the starter artifact.
//!
//! Prefers a canonical artifact shipped in the source tree over a synthesized
//! one, so the overlay never drifts from what the garden actually publishes.
//! Only the template's own starter filename is ever written; files placed by
//! the core copy are untouched.

use std::path::Path;

use tracing::debug;

use crate::application::ports::WorkspaceFs;
use crate::domain::ProjectTemplate;
use crate::error::ForkResult;

/// Directory inside the source tree where canonical starter apps live.
const TOOLSHED_DIR: &str = "toolshed";

/// Materializes one starter artifact on top of the copied core.
pub struct TemplateOverlay<'a> {
    fs: &'a dyn WorkspaceFs,
}

impl<'a> TemplateOverlay<'a> {
    pub fn new(fs: &'a dyn WorkspaceFs) -> Self {
        Self { fs }
    }

    /// Write the template's starter file into `dest_root`.
    pub fn materialize(
        &self,
        template: &ProjectTemplate,
        dest_root: &Path,
        source_root: &Path,
    ) -> ForkResult<()> {
        let dest = dest_root.join(&template.starter_file);

        // Preferred path: copy the canonical artifact verbatim if the source
        // tree ships one, at the root or under toolshed/.
        for candidate in [
            source_root.join(&template.starter_file),
            source_root.join(TOOLSHED_DIR).join(&template.starter_file),
        ] {
            if self.fs.is_file(&candidate) {
                debug!(from = %candidate.display(), "copying canonical starter");
                return self.fs.copy_file(&candidate, &dest);
            }
        }

        debug!(template = %template.id, "synthesizing placeholder starter");
        self.fs.write_file(&dest, &placeholder(template))
    }
}

/// Minimal placeholder starter page for templates without a canonical
/// artifact in the source tree.
fn placeholder(template: &ProjectTemplate) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20   <meta charset=\"UTF-8\">\n\
         \x20   <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         \x20   <title>{name}</title>\n\
         </head>\n\
         <body>\n\
         \x20   <h1>{name}</h1>\n\
         \x20   <p>{description}</p>\n\
         \x20   <p>Ready for implementation.</p>\n\
         </body>\n\
         </html>\n",
        name = template.name,
        description = template.description,
    )
}
