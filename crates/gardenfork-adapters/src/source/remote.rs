//! Remote source resolution: download and unpack a branch archive.
//!
//! Issues a blocking GET against the branch-qualified zip archive URL,
//! streams the body into scoped temporary storage, unpacks it, and picks the
//! single `<repo>-<branch>` top-level directory. The temporary directory is
//! owned by the returned `SourceRoot`, so it is released when the fork ends,
//! whatever the outcome.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info};

use gardenfork_core::application::{ApplicationError, SourceError, ports::SourceProvider};
use gardenfork_core::domain::SourceRoot;
use gardenfork_core::error::ForkResult;

/// Remote acquisition settings.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Archive host, e.g. `github.com`.
    pub host: String,
    /// `owner/repo`.
    pub repo: String,
    pub branch: String,
    /// Whole-request timeout. The original design had none; an unbounded
    /// download blocks the entire tool.
    pub timeout: Duration,
    /// Maximum accepted archive size in bytes.
    pub max_archive_bytes: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: "github.com".into(),
            repo: "scottloeb/garden".into(),
            branch: "main".into(),
            timeout: Duration::from_secs(30),
            max_archive_bytes: 100 * 1024 * 1024,
        }
    }
}

/// Resolves a source root by downloading a repository archive.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    config: RemoteConfig,
}

impl RemoteSource {
    pub fn new(config: RemoteConfig) -> Self {
        Self { config }
    }

    /// Branch-qualified archive URL.
    pub fn archive_url(&self) -> String {
        format!(
            "https://{}/{}/archive/refs/heads/{}.zip",
            self.config.host, self.config.repo, self.config.branch
        )
    }

    /// Repository name without the owner, used as the extraction prefix.
    fn repo_name(&self) -> &str {
        self.config
            .repo
            .rsplit('/')
            .next()
            .unwrap_or(&self.config.repo)
    }

    fn download(&self, dest: &Path) -> ForkResult<()> {
        let url = self.archive_url();
        let network = |reason: String| SourceError::Network {
            url: url.clone(),
            reason,
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| network(e.to_string()))?;

        info!(%url, "downloading archive");
        let response = client.get(&url).send().map_err(|e| network(e.to_string()))?;
        if !response.status().is_success() {
            return Err(network(format!("HTTP {}", response.status())).into());
        }

        let mut file = File::create(dest).map_err(|e| ApplicationError::Filesystem {
            path: dest.to_path_buf(),
            reason: format!("failed to create archive file: {e}"),
        })?;

        // Read one byte past the cap so an exactly-at-limit archive passes
        // and an over-limit one is detected without downloading the rest.
        let mut limited = response.take(self.config.max_archive_bytes + 1);
        let written = io::copy(&mut limited, &mut file).map_err(|e| network(e.to_string()))?;
        if written > self.config.max_archive_bytes {
            return Err(SourceError::ArchiveTooLarge {
                limit_bytes: self.config.max_archive_bytes,
            }
            .into());
        }
        debug!(bytes = written, "archive downloaded");
        Ok(())
    }

    fn unpack(&self, archive_path: &Path, extract_dir: &Path) -> ForkResult<()> {
        let corrupt = |reason: String| SourceError::ArchiveCorrupt { reason };

        let file = File::open(archive_path).map_err(|e| corrupt(e.to_string()))?;
        let mut archive = zip::ZipArchive::new(file).map_err(|e| corrupt(e.to_string()))?;
        archive
            .extract(extract_dir)
            .map_err(|e| corrupt(e.to_string()))?;
        debug!(entries = archive.len(), "archive extracted");
        Ok(())
    }
}

impl SourceProvider for RemoteSource {
    fn resolve(&self) -> ForkResult<SourceRoot> {
        // Scoped temporary storage: the TempDir travels inside the returned
        // SourceRoot and is removed on drop, on every exit path. Errors
        // below drop it immediately.
        let scratch = tempfile::Builder::new()
            .prefix("gardenfork-")
            .tempdir()
            .map_err(|e| ApplicationError::Filesystem {
                path: std::env::temp_dir(),
                reason: format!("failed to allocate temporary storage: {e}"),
            })?;

        let archive_path = scratch.path().join("archive.zip");
        self.download(&archive_path)?;

        let extract_dir = scratch.path().join("extracted");
        std::fs::create_dir_all(&extract_dir).map_err(|e| ApplicationError::Filesystem {
            path: extract_dir.clone(),
            reason: format!("failed to create extraction directory: {e}"),
        })?;
        self.unpack(&archive_path, &extract_dir)?;

        let root = select_extracted_root(&extract_dir, self.repo_name())?;
        info!(root = %root.display(), "remote source resolved");
        Ok(SourceRoot::remote_archive(
            root,
            self.config.repo.clone(),
            self.config.branch.clone(),
            Box::new(scratch),
        ))
    }
}

/// Pick the single top-level extracted directory named `<repo>-*`.
fn select_extracted_root(extract_dir: &Path, repo_name: &str) -> Result<PathBuf, SourceError> {
    let expected_prefix = format!("{repo_name}-");
    let mut candidates = Vec::new();

    let entries = std::fs::read_dir(extract_dir).map_err(|e| SourceError::ArchiveCorrupt {
        reason: format!("failed to list extraction directory: {e}"),
    })?;
    for entry in entries {
        let entry = entry.map_err(|e| SourceError::ArchiveCorrupt {
            reason: format!("failed to list extraction directory: {e}"),
        })?;
        let path = entry.path();
        if path.is_dir()
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(&expected_prefix))
        {
            candidates.push(path);
        }
    }

    if candidates.len() == 1 {
        Ok(candidates.remove(0))
    } else {
        Err(SourceError::AmbiguousExtraction {
            expected_prefix,
            found: candidates.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_url_is_branch_qualified() {
        let source = RemoteSource::new(RemoteConfig::default());
        assert_eq!(
            source.archive_url(),
            "https://github.com/scottloeb/garden/archive/refs/heads/main.zip"
        );
    }

    #[test]
    fn repo_name_drops_owner() {
        let source = RemoteSource::new(RemoteConfig {
            repo: "someone/orchard".into(),
            ..RemoteConfig::default()
        });
        assert_eq!(source.repo_name(), "orchard");
    }

    #[test]
    fn single_matching_directory_is_selected() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("garden-main");
        std::fs::create_dir_all(&root).unwrap();

        let selected = select_extracted_root(temp.path(), "garden").unwrap();
        assert_eq!(selected, root);
    }

    #[test]
    fn zero_candidates_is_ambiguous() {
        let temp = tempfile::tempdir().unwrap();
        let err = select_extracted_root(temp.path(), "garden").unwrap_err();
        assert!(matches!(
            err,
            SourceError::AmbiguousExtraction { found: 0, .. }
        ));
    }

    #[test]
    fn multiple_candidates_are_ambiguous() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(temp.path().join("garden-main")).unwrap();
        std::fs::create_dir_all(temp.path().join("garden-dev")).unwrap();
        let err = select_extracted_root(temp.path(), "garden").unwrap_err();
        assert!(matches!(
            err,
            SourceError::AmbiguousExtraction { found: 2, .. }
        ));
    }

    #[test]
    fn non_matching_directories_are_ignored() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(temp.path().join("garden-main")).unwrap();
        std::fs::create_dir_all(temp.path().join("other-main")).unwrap();
        let selected = select_extracted_root(temp.path(), "garden").unwrap();
        assert!(selected.ends_with("garden-main"));
    }
}
