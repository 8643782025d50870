//! JSON file snapshot store
//!
//! Keeps the latest snapshot as pretty-printed JSON. Each save writes a
//! temporary sibling and renames it over the target, so readers never see a
//! half-written file. Saves are serialized, and a snapshot older than the
//! one last written is dropped, so the file always holds the newest capture.

use crate::constants::SNAPSHOT_TEMP_EXTENSION;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hostmon_domain::error::{Error, Result};
use hostmon_domain::ports::SnapshotStore;
use hostmon_domain::value_objects::MetricsSnapshot;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::debug;

/// Snapshot store writing one JSON file
#[derive(Debug)]
pub struct JsonFileSnapshotStore {
    path: PathBuf,
    writes: AtomicU64,
    /// Capture time of the snapshot currently on disk; held across write and rename
    last_written: Mutex<Option<DateTime<Utc>>>,
}

impl JsonFileSnapshotStore {
    /// Store writing to `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            writes: AtomicU64::new(0),
            last_written: Mutex::new(None),
        }
    }

    /// Target file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unique temporary sibling for one write
    ///
    /// Unique per process and write, so stores in other processes sharing
    /// the directory do not collide.
    fn temp_path(&self) -> PathBuf {
        let sequence = self.writes.fetch_add(1, Ordering::Relaxed);
        let name = self
            .path
            .file_name()
            .map_or_else(|| "snapshot".into(), |n| n.to_string_lossy());
        self.path.with_file_name(format!(
            ".{name}.{}.{sequence}.{SNAPSHOT_TEMP_EXTENSION}",
            std::process::id()
        ))
    }

    async fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    Error::persistence_with_source(
                        format!("Failed to create directory {}", parent.display()),
                        e,
                    )
                })
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl SnapshotStore for JsonFileSnapshotStore {
    async fn save(&self, snapshot: &MetricsSnapshot) -> Result<()> {
        let content = serde_json::to_string_pretty(snapshot).map_err(|e| {
            Error::persistence_with_source("Failed to serialize metrics snapshot", e)
        })?;

        let mut last_written = self.last_written.lock().await;
        if let Some(last) = *last_written
            && snapshot.timestamp < last
        {
            debug!(
                timestamp = %snapshot.timestamp,
                latest = %last,
                "Skipping snapshot older than the one on disk"
            );
            return Ok(());
        }

        self.ensure_parent().await?;

        let temp = self.temp_path();
        if let Err(e) = tokio::fs::write(&temp, content).await {
            return Err(Error::persistence_with_source(
                format!("Failed to write {}", temp.display()),
                e,
            ));
        }
        if let Err(e) = tokio::fs::rename(&temp, &self.path).await {
            // Best effort; the rename error is the one reported
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(Error::persistence_with_source(
                format!("Failed to replace {}", self.path.display()),
                e,
            ));
        }

        *last_written = Some(snapshot.timestamp);
        debug!(path = %self.path.display(), "Snapshot written");
        Ok(())
    }

    async fn load_latest(&self) -> Result<Option<MetricsSnapshot>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::persistence_with_source(
                    format!("Failed to read {}", self.path.display()),
                    e,
                ));
            }
        };

        serde_json::from_str(&content).map(Some).map_err(|e| {
            Error::persistence_with_source(
                format!("Failed to parse {}", self.path.display()),
                e,
            )
        })
    }
}
