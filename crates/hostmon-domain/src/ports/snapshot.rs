//! Snapshot Persistence Port
//!
//! Defines the contract for keeping the most recent metrics snapshot.

use crate::error::Result;
use crate::value_objects::MetricsSnapshot;
use async_trait::async_trait;

/// Store holding the latest metrics snapshot
///
/// Each save replaces the previous snapshot; no history is kept.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Replace the stored snapshot
    async fn save(&self, snapshot: &MetricsSnapshot) -> Result<()>;

    /// Read back the stored snapshot, `None` when nothing was saved yet
    async fn load_latest(&self) -> Result<Option<MetricsSnapshot>>;
}
