//! Metrics Service Interface

use async_trait::async_trait;
use hostmon_domain::error::Result;
use hostmon_domain::value_objects::MetricsSnapshot;

/// Metrics Service Interface
///
/// One call is one independent acquisition cycle; nothing is cached between
/// calls.
#[async_trait]
pub trait MetricsServiceInterface: Send + Sync {
    /// Acquire, parse and assemble a fresh snapshot without persisting it
    async fn collect(&self) -> Result<MetricsSnapshot>;

    /// Collect a snapshot and persist it on a detached task
    ///
    /// Returns as soon as the snapshot is assembled. A persistence failure is
    /// logged and never reaches the caller.
    async fn record(&self) -> Result<MetricsSnapshot>;

    /// Persist a snapshot and wait for the write to finish
    async fn persist(&self, snapshot: &MetricsSnapshot) -> Result<()>;

    /// Most recently persisted snapshot, if any
    async fn latest_persisted(&self) -> Result<Option<MetricsSnapshot>>;
}
