//! The persisted fork-provenance record.
//!
//! A hidden JSON file at the project root is the sole durable source of truth
//! for "is this a valid fork". Listing and status operations read it; later
//! deployment tooling mutates only `deploy_status`. Readers tolerate unknown
//! extra keys for forward compatibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default value for a record that has never been deployed.
pub const DEPLOY_STATUS_DEFAULT: &str = "not deployed";

/// Fork provenance, persisted as `.garden-project.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForkRecord {
    /// Project name (destination directory name).
    pub name: String,
    /// Template id the starter overlay came from.
    pub template: String,
    /// Creation timestamp, ISO-8601.
    pub created: DateTime<Utc>,
    /// Tool version that wrote the record.
    pub garden_version: String,
    /// Origin identity: local path or `repo@branch`.
    pub forked_from: String,
    /// Mutable deploy-status field, owned by out-of-scope deploy tooling.
    #[serde(default = "default_deploy_status")]
    pub deploy_status: String,
    /// Unknown keys written by newer tool versions, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_deploy_status() -> String {
    DEPLOY_STATUS_DEFAULT.to_string()
}

impl ForkRecord {
    /// Fresh record for a fork created now.
    pub fn new(
        name: impl Into<String>,
        template: impl Into<String>,
        forked_from: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            created: Utc::now(),
            garden_version: crate::VERSION.to_string(),
            forked_from: forked_from.into(),
            deploy_status: default_deploy_status(),
            extra: serde_json::Map::new(),
        }
    }
}
