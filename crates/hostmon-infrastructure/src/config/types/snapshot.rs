//! Snapshot file configuration

use hostmon_providers::constants::DEFAULT_SNAPSHOT_PATH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Snapshot file configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Persist each successful snapshot
    pub enabled: bool,

    /// File the latest snapshot is written to
    pub path: PathBuf,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
        }
    }
}
