//! Null snapshot store
//!
//! Used when snapshot persistence is disabled.

use async_trait::async_trait;
use hostmon_domain::error::Result;
use hostmon_domain::ports::SnapshotStore;
use hostmon_domain::value_objects::MetricsSnapshot;

/// Snapshot store that keeps nothing
///
/// # Example
///
/// ```rust
/// use hostmon_providers::persistence::NullSnapshotStore;
///
/// let store = NullSnapshotStore::new();
/// // Saves succeed, nothing is ever loaded back
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSnapshotStore;

impl NullSnapshotStore {
    /// Create a new null snapshot store
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SnapshotStore for NullSnapshotStore {
    async fn save(&self, _snapshot: &MetricsSnapshot) -> Result<()> {
        Ok(())
    }

    async fn load_latest(&self) -> Result<Option<MetricsSnapshot>> {
        Ok(None)
    }
}
