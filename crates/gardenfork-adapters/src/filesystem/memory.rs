//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use gardenfork_core::{
    application::ports::WorkspaceFs,
    error::{ForkError, ForkResult},
};

/// In-memory filesystem for engine tests.
///
/// BTree-backed so traversal order is sorted, matching the local adapter's
/// determinism guarantee.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    inner: Arc<RwLock<MemoryFsInner>>,
}

#[derive(Debug, Default)]
struct MemoryFsInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating parent directories (testing helper).
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        add_parents(&mut inner.directories, &path);
        inner.files.insert(path, content.into());
    }

    /// Seed an empty directory (testing helper).
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        add_parents(&mut inner.directories, &path);
        inner.directories.insert(path);
    }

    /// Remove a single file (testing helper, e.g. to simulate an upstream
    /// deletion between two forks).
    pub fn delete_file(&self, path: &Path) {
        self.inner.write().unwrap().files.remove(path);
    }

    /// Read a file's content without going through the port (testing helper).
    pub fn file_content(&self, path: &Path) -> Option<String> {
        self.inner.read().unwrap().files.get(path).cloned()
    }

    /// List all file paths (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner.read().unwrap().files.keys().cloned().collect()
    }
}

fn add_parents(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        if current != path {
            directories.insert(current.clone());
        }
    }
}

fn lock_error() -> ForkError {
    ForkError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

fn not_found(path: &Path, operation: &str) -> ForkError {
    gardenfork_core::application::ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: not found"),
    }
    .into()
}

impl WorkspaceFs for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner.read().unwrap().files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.read().unwrap().directories.contains(path)
    }

    fn walk_files(&self, dir: &Path) -> ForkResult<Vec<PathBuf>> {
        let inner = self.inner.read().map_err(|_| lock_error())?;
        Ok(inner
            .files
            .keys()
            .filter(|p| p.starts_with(dir))
            .cloned()
            .collect())
    }

    fn read_dir(&self, dir: &Path) -> ForkResult<Vec<PathBuf>> {
        let inner = self.inner.read().map_err(|_| lock_error())?;
        let mut children: BTreeSet<PathBuf> = BTreeSet::new();
        for path in inner.files.keys().chain(inner.directories.iter()) {
            if path.parent() == Some(dir) {
                children.insert(path.clone());
            }
        }
        Ok(children.into_iter().collect())
    }

    fn create_dir_all(&self, path: &Path) -> ForkResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;
        add_parents(&mut inner.directories, path);
        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn copy_file(&self, src: &Path, dest: &Path) -> ForkResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;
        let content = inner
            .files
            .get(src)
            .cloned()
            .ok_or_else(|| not_found(src, "copy file"))?;
        inner.files.insert(dest.to_path_buf(), content);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ForkResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> ForkResult<String> {
        let inner = self.inner.read().map_err(|_| lock_error())?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path, "read file"))
    }

    fn remove_dir_all(&self, path: &Path) -> ForkResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}
