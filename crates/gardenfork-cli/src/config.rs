//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config` path, or the default location if present)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use gardenfork_adapters::RemoteConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Local garden source discovery.
    pub source: SourceConfig,
    /// Remote archive acquisition.
    pub remote: RemoteSettings,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Candidate directories probed, in order, for a local garden checkout.
    pub candidates: Vec<PathBuf>,
    /// Subdirectory whose presence marks a candidate as a garden.
    pub marker: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            candidates: vec![PathBuf::from("../garden"), PathBuf::from("garden")],
            marker: "toolshed".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteSettings {
    pub host: String,
    /// `owner/repo`.
    pub repo: String,
    pub branch: String,
    pub timeout_secs: u64,
    pub max_archive_mb: u64,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        let defaults = RemoteConfig::default();
        Self {
            host: defaults.host,
            repo: defaults.repo,
            branch: defaults.branch,
            timeout_secs: defaults.timeout.as_secs(),
            max_archive_mb: defaults.max_archive_bytes / (1024 * 1024),
        }
    }
}

impl RemoteSettings {
    /// Adapter-level config, with an optional branch override from the CLI.
    pub fn to_remote_config(&self, branch: Option<&str>) -> RemoteConfig {
        RemoteConfig {
            host: self.host.clone(),
            repo: self.repo.clone(),
            branch: branch.unwrap_or(&self.branch).to_string(),
            timeout: Duration::from_secs(self.timeout_secs),
            max_archive_bytes: self.max_archive_mb * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config` path must exist; the default location is
    /// optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };

        if !path.is_file() {
            if required {
                anyhow::bail!("config file not found: {}", path.display());
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.gardenfork.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "gardenfork", "gardenfork")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".gardenfork.toml"))
    }
}
