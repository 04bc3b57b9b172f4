//! Reading and writing the persisted fork record.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::RECORD_FILE;
use crate::application::error::ApplicationError;
use crate::application::ports::WorkspaceFs;
use crate::domain::ForkRecord;
use crate::error::ForkResult;

/// Persists [`ForkRecord`]s and reads them back for listing/status.
pub struct MetadataRecorder<'a> {
    fs: &'a dyn WorkspaceFs,
}

impl<'a> MetadataRecorder<'a> {
    pub fn new(fs: &'a dyn WorkspaceFs) -> Self {
        Self { fs }
    }

    /// Path of the record file for a project directory.
    pub fn record_path(project_dir: &Path) -> PathBuf {
        project_dir.join(RECORD_FILE)
    }

    /// Write the record. Failure here is fatal to a fork in progress.
    pub fn write(&self, project_dir: &Path, record: &ForkRecord) -> ForkResult<()> {
        let path = Self::record_path(project_dir);
        let json =
            serde_json::to_string_pretty(record).map_err(|e| ApplicationError::MetadataWrite {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        self.fs
            .write_file(&path, &json)
            .map_err(|e| ApplicationError::MetadataWrite {
                path,
                reason: e.to_string(),
            })?;
        Ok(())
    }

    /// Read a record back. Unknown extra keys are preserved.
    pub fn read(&self, project_dir: &Path) -> ForkResult<ForkRecord> {
        let path = Self::record_path(project_dir);
        let json = self
            .fs
            .read_file(&path)
            .map_err(|e| ApplicationError::MetadataRead {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        let record =
            serde_json::from_str(&json).map_err(|e| ApplicationError::MetadataRead {
                path,
                reason: e.to_string(),
            })?;
        Ok(record)
    }

    /// Whether `dir` carries a record — the definition of a valid fork.
    pub fn is_fork(&self, dir: &Path) -> bool {
        self.fs.is_file(&Self::record_path(dir))
    }

    /// All recognized forks directly under `root`, with their records.
    ///
    /// Directories without a record are skipped silently: a half-created
    /// directory is garbage, not a project. A record that exists but cannot
    /// be parsed is also skipped, so one corrupt project cannot hide the
    /// rest of the listing.
    pub fn scan(&self, root: &Path) -> ForkResult<Vec<(PathBuf, ForkRecord)>> {
        let mut found = Vec::new();
        if !self.fs.is_dir(root) {
            return Ok(found);
        }
        for child in self.fs.read_dir(root)? {
            if self.fs.is_dir(&child) && self.is_fork(&child) {
                match self.read(&child) {
                    Ok(record) => found.push((child, record)),
                    Err(e) => {
                        warn!(path = %child.display(), error = %e, "skipping unreadable record");
                    }
                }
            }
        }
        Ok(found)
    }
}
