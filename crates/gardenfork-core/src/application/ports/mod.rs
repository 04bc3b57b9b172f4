//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the fork engine needs from external systems.
//! The `gardenfork-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::SourceRoot;
use crate::error::ForkResult;

/// Port for resolving a readable source root.
///
/// Implemented by:
/// - `gardenfork_adapters::source::LocalSource` (candidate-directory probing)
/// - `gardenfork_adapters::source::RemoteSource` (archive download + unpack)
/// - `gardenfork_adapters::source::StaticSource` (testing)
///
/// ## Design Notes
///
/// The returned [`SourceRoot`] owns any ephemeral storage it needed; dropping
/// it releases the storage on every exit path. Resolution is blocking and is
/// expected to enforce its own timeout and size limits.
pub trait SourceProvider: Send + Sync {
    /// Resolve the source tree this fork copies from.
    fn resolve(&self) -> ForkResult<SourceRoot>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `gardenfork_adapters::filesystem::LocalFs` (production)
/// - `gardenfork_adapters::filesystem::MemoryFs` (testing)
///
/// ## Design Notes
///
/// - `walk_files` returns paths in a stable sorted order so two forks of the
///   same source produce identical trees.
/// - Read-only operations (`exists`, `is_file`, `walk_files`) back the
///   resolver and the dry-run discovery mode; write operations back the
///   copier and overlay.
pub trait WorkspaceFs: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// All files beneath `dir`, recursively, in sorted order.
    fn walk_files(&self, dir: &Path) -> ForkResult<Vec<PathBuf>>;

    /// Immediate children of `dir`, in sorted order.
    fn read_dir(&self, dir: &Path) -> ForkResult<Vec<PathBuf>>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForkResult<()>;

    /// Copy one file. The parent of `dest` must already exist.
    fn copy_file(&self, src: &Path, dest: &Path) -> ForkResult<()>;

    /// Write text content to a file.
    fn write_file(&self, path: &Path, content: &str) -> ForkResult<()>;

    /// Read a file into a string.
    fn read_file(&self, path: &Path) -> ForkResult<String>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ForkResult<()>;
}

/// Port for the version-control collaborator.
///
/// Three sequential invocations (init, stage all, commit) treated as opaque;
/// only success or failure matters to the engine, and failure is non-fatal.
pub trait Vcs: Send + Sync {
    /// Initialize a repository in `dir`, stage everything, and commit with
    /// `message`. Returns a human-readable reason on failure.
    fn initialize(&self, dir: &Path, message: &str) -> Result<(), String>;
}
