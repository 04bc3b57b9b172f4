//! Source providers implementing the `SourceProvider` port.
//!
//! Two production variants (local checkout, remote archive) plus a static
//! one for tests. The engine never knows which it got.

pub mod local;
pub mod remote;

pub use local::LocalSource;
pub use remote::{RemoteConfig, RemoteSource};

use gardenfork_core::application::ports::SourceProvider;
use gardenfork_core::domain::SourceRoot;
use gardenfork_core::error::ForkResult;
use std::path::PathBuf;

/// Source provider over a fixed, pre-validated path. Testing only.
#[derive(Debug, Clone)]
pub struct StaticSource {
    path: PathBuf,
}

impl StaticSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SourceProvider for StaticSource {
    fn resolve(&self) -> ForkResult<SourceRoot> {
        Ok(SourceRoot::local(self.path.clone()))
    }
}
