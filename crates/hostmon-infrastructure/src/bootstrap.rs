//! Service bootstrap
//!
//! Composition root: turns an [`AppConfig`] into the concrete providers and
//! the metrics service the server drives.
//!
//! ```text
//! AppConfig → TopCommandSource ─┐
//!           → SnapshotStore ────┴→ MetricsServiceImpl
//! ```

use crate::config::{AppConfig, MonitorConfig, SnapshotConfig};
use hostmon_application::{MetricsServiceImpl, MetricsServiceInterface};
use hostmon_domain::error::Result;
use hostmon_domain::ports::{SampleSource, SnapshotStore};
use hostmon_providers::acquisition::TopCommandSource;
use hostmon_providers::persistence::{JsonFileSnapshotStore, NullSnapshotStore};
use std::sync::Arc;
use tracing::info;

/// Application context shared with the server
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    metrics: Arc<dyn MetricsServiceInterface>,
}

impl AppContext {
    /// Context around an already built service
    pub fn new(config: AppConfig, metrics: Arc<dyn MetricsServiceInterface>) -> Self {
        Self {
            config: Arc::new(config),
            metrics,
        }
    }

    /// Metrics service
    pub fn metrics_service(&self) -> Arc<dyn MetricsServiceInterface> {
        Arc::clone(&self.metrics)
    }
}

/// Sample source for the configured monitor command
pub fn build_sample_source(config: &MonitorConfig) -> Arc<dyn SampleSource> {
    Arc::new(
        TopCommandSource::with_command(config.program.clone(), config.args.clone())
            .with_timeout(config.timeout()),
    )
}

/// Snapshot store for the configured file, or the null store when disabled
pub fn build_snapshot_store(config: &SnapshotConfig) -> Arc<dyn SnapshotStore> {
    if config.enabled {
        Arc::new(JsonFileSnapshotStore::new(config.path.clone()))
    } else {
        Arc::new(NullSnapshotStore::new())
    }
}

/// Wire the metrics service from configuration
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    crate::config::loader::validate_app_config(&config)?;

    let source = build_sample_source(&config.monitor);
    let store = build_snapshot_store(&config.snapshot);

    info!(
        command = %source.describe(),
        timeout_secs = config.monitor.timeout_secs,
        snapshot = config.snapshot.enabled,
        snapshot_path = %config.snapshot.path.display(),
        "Metrics service initialized"
    );

    let metrics = Arc::new(MetricsServiceImpl::new(source, store));
    Ok(AppContext::new(config, metrics))
}
