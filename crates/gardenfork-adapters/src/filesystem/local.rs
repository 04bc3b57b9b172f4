//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use gardenfork_core::{application::ports::WorkspaceFs, error::ForkResult};

/// Production filesystem implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl WorkspaceFs for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn walk_files(&self, dir: &Path) -> ForkResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        // sort_by_file_name gives a stable traversal order, so two forks of
        // the same source produce identical trees.
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| map_walk_error(dir, e))?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn read_dir(&self, dir: &Path) -> ForkResult<Vec<PathBuf>> {
        let mut children = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| map_io_error(dir, e, "read directory"))? {
            let entry = entry.map_err(|e| map_io_error(dir, e, "read directory entry"))?;
            children.push(entry.path());
        }
        children.sort();
        Ok(children)
    }

    fn create_dir_all(&self, path: &Path) -> ForkResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn copy_file(&self, src: &Path, dest: &Path) -> ForkResult<()> {
        std::fs::copy(src, dest)
            .map(|_| ())
            .map_err(|e| map_io_error(dest, e, "copy file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ForkResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> ForkResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn remove_dir_all(&self, path: &Path) -> ForkResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> gardenfork_core::error::ForkError {
    use gardenfork_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
    .into()
}

fn map_walk_error(dir: &Path, e: walkdir::Error) -> gardenfork_core::error::ForkError {
    use gardenfork_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: e
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| dir.to_path_buf()),
        reason: format!("failed to walk directory: {e}"),
    }
    .into()
}
