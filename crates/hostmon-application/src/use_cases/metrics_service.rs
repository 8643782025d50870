//! Metrics Service Use Case
//!
//! acquire → parse → assemble → persist (detached).

use crate::domain_services::MetricsServiceInterface;
use hostmon_domain::error::Result;
use hostmon_domain::parsing::MonitorOutputParser;
use hostmon_domain::ports::{SampleSource, SnapshotStore};
use hostmon_domain::value_objects::MetricsSnapshot;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Metrics service implementation
pub struct MetricsServiceImpl {
    source: Arc<dyn SampleSource>,
    store: Arc<dyn SnapshotStore>,
    parser: MonitorOutputParser,
}

impl MetricsServiceImpl {
    /// Create a service with the built-in parser
    pub fn new(source: Arc<dyn SampleSource>, store: Arc<dyn SnapshotStore>) -> Self {
        Self::with_parser(source, store, MonitorOutputParser::new())
    }

    /// Create a service with a custom parser
    pub fn with_parser(
        source: Arc<dyn SampleSource>,
        store: Arc<dyn SnapshotStore>,
        parser: MonitorOutputParser,
    ) -> Self {
        Self {
            source,
            store,
            parser,
        }
    }

    /// Persist `snapshot` on a detached task
    ///
    /// The handle may be dropped; the write still runs to completion.
    pub fn spawn_persist(&self, snapshot: MetricsSnapshot) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            match store.save(&snapshot).await {
                Ok(()) => debug!(timestamp = %snapshot.timestamp, "Snapshot persisted"),
                Err(e) => warn!(error = %e, kind = e.kind(), "Failed to persist snapshot"),
            }
        })
    }

    async fn try_collect(&self) -> Result<MetricsSnapshot> {
        let sample = self.source.acquire().await?;
        debug!(
            source = %self.source.describe(),
            output = %sample.as_str(),
            "Raw monitor output"
        );
        self.parser.parse_snapshot(&sample)
    }
}

#[async_trait::async_trait]
impl MetricsServiceInterface for MetricsServiceImpl {
    async fn collect(&self) -> Result<MetricsSnapshot> {
        match self.try_collect().await {
            Ok(snapshot) => {
                info!(
                    cpu_usage = snapshot.cpu.usage_percent,
                    memory_percent_used = snapshot.memory.percent_used,
                    "Metrics collected"
                );
                Ok(snapshot)
            }
            Err(e) => {
                warn!(error = %e, kind = e.kind(), "Metrics collection failed");
                Err(e)
            }
        }
    }

    async fn record(&self) -> Result<MetricsSnapshot> {
        let snapshot = self.collect().await?;
        // Not awaited
        drop(self.spawn_persist(snapshot.clone()));
        Ok(snapshot)
    }

    async fn persist(&self, snapshot: &MetricsSnapshot) -> Result<()> {
        self.store.save(snapshot).await
    }

    async fn latest_persisted(&self) -> Result<Option<MetricsSnapshot>> {
        self.store.load_latest().await
    }
}
