//! Shared fixtures for server tests

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use hostmon_application::MetricsServiceInterface;
use hostmon_domain::{CpuReading, Error, MemoryReading, MemoryUnit, MetricsSnapshot, Result};
use hostmon_server::api::MetricsState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Snapshot matching the procps-ng sample used across the suite
pub fn sample_snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        timestamp: Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 15).unwrap(),
        cpu: CpuReading {
            usage_percent: 14.4,
        },
        memory: MemoryReading {
            total_mib: 7943.0,
            used_mib: 3200.0,
            free_mib: 2000.0,
            percent_used: 40.29,
            unit: MemoryUnit::MiB,
        },
    }
}

/// What the mock service answers with
pub enum Outcome {
    Snapshot,
    AcquisitionFailure,
    MissingMemoryLine,
    ZeroTotal,
}

/// Metrics service returning a canned outcome
pub struct MockMetricsService {
    outcome: Outcome,
    pub records: AtomicUsize,
}

impl MockMetricsService {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            records: AtomicUsize::new(0),
        }
    }

    fn answer(&self) -> Result<MetricsSnapshot> {
        match self.outcome {
            Outcome::Snapshot => Ok(sample_snapshot()),
            Outcome::AcquisitionFailure => Err(Error::acquisition("Failed to launch `top -b -n 1`")),
            Outcome::MissingMemoryLine => Err(Error::MemLineNotFound),
            Outcome::ZeroTotal => Err(Error::DivisionByZeroMemory),
        }
    }
}

#[async_trait]
impl MetricsServiceInterface for MockMetricsService {
    async fn collect(&self) -> Result<MetricsSnapshot> {
        self.answer()
    }

    async fn record(&self) -> Result<MetricsSnapshot> {
        self.records.fetch_add(1, Ordering::SeqCst);
        self.answer()
    }

    async fn persist(&self, _snapshot: &MetricsSnapshot) -> Result<()> {
        Ok(())
    }

    async fn latest_persisted(&self) -> Result<Option<MetricsSnapshot>> {
        Ok(None)
    }
}

/// Handler state around a mock service
pub fn mock_state(outcome: Outcome) -> (MetricsState, Arc<MockMetricsService>) {
    let service = Arc::new(MockMetricsService::new(outcome));
    (MetricsState::new(service.clone()), service)
}
