//! Resolved source roots and their provenance.

use std::any::Any;
use std::path::{Path, PathBuf};

/// Where a source root came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    /// A directory already on disk.
    Local { path: PathBuf },
    /// Downloaded and extracted from a branch-qualified archive.
    RemoteArchive { repo: String, branch: String },
}

impl SourceOrigin {
    /// Provenance string recorded in the fork record and commit message.
    pub fn provenance(&self) -> String {
        match self {
            Self::Local { path } => path.display().to_string(),
            Self::RemoteArchive { repo, branch } => format!("{repo}@{branch}"),
        }
    }
}

/// A readable source tree that patterns are matched against.
///
/// For remote origins this owns the ephemeral extraction directory: dropping
/// the `SourceRoot` releases it, on every exit path. Callers never perform a
/// separate cleanup step.
pub struct SourceRoot {
    path: PathBuf,
    origin: SourceOrigin,
    // Scoped temp storage (a TempDir in practice). Held only for its Drop.
    _scratch: Option<Box<dyn Any + Send>>,
}

impl SourceRoot {
    /// Source root over an existing local directory.
    pub fn local(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            origin: SourceOrigin::Local { path: path.clone() },
            path,
            _scratch: None,
        }
    }

    /// Source root extracted from a downloaded archive. `scratch` is the
    /// guard for the temporary storage holding `path`.
    pub fn remote_archive(
        path: impl Into<PathBuf>,
        repo: impl Into<String>,
        branch: impl Into<String>,
        scratch: Box<dyn Any + Send>,
    ) -> Self {
        Self {
            path: path.into(),
            origin: SourceOrigin::RemoteArchive {
                repo: repo.into(),
                branch: branch.into(),
            },
            _scratch: Some(scratch),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn origin(&self) -> &SourceOrigin {
        &self.origin
    }
}

impl std::fmt::Debug for SourceRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceRoot")
            .field("path", &self.path)
            .field("origin", &self.origin)
            .field("scoped", &self._scratch.is_some())
            .finish()
    }
}
