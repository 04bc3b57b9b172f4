//! Local source resolution by candidate-directory probing.

use std::path::PathBuf;

use tracing::debug;

use gardenfork_core::application::{SourceError, ports::SourceProvider};
use gardenfork_core::domain::SourceRoot;
use gardenfork_core::error::ForkResult;

/// Resolves a source root from directories already on disk.
///
/// Probes an ordered candidate list and accepts the first directory carrying
/// the marker subdirectory. An explicit path, when given, wins over probing
/// but is still validated. Both lists are plain configuration; nothing here
/// inspects the ambient working directory.
#[derive(Debug, Clone)]
pub struct LocalSource {
    candidates: Vec<PathBuf>,
    marker: String,
    explicit: Option<PathBuf>,
}

impl LocalSource {
    pub fn new(candidates: Vec<PathBuf>, marker: impl Into<String>) -> Self {
        Self {
            candidates,
            marker: marker.into(),
            explicit: None,
        }
    }

    /// Use an explicit path instead of probing. Still validated on resolve.
    pub fn with_explicit_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit = Some(path.into());
        self
    }
}

impl SourceProvider for LocalSource {
    fn resolve(&self) -> ForkResult<SourceRoot> {
        if let Some(path) = &self.explicit {
            if path.is_dir() {
                debug!(path = %path.display(), "using explicit source path");
                return Ok(SourceRoot::local(path.clone()));
            }
            return Err(SourceError::NotFound {
                searched: vec![path.clone()],
            }
            .into());
        }

        for candidate in &self.candidates {
            if candidate.join(&self.marker).is_dir() {
                debug!(path = %candidate.display(), marker = %self.marker, "source candidate matched");
                return Ok(SourceRoot::local(candidate.clone()));
            }
        }

        Err(SourceError::NotFound {
            searched: self.candidates.clone(),
        }
        .into())
    }
}
