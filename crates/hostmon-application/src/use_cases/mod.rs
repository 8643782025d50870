//! Use Case Implementations

/// Metrics collection use case
pub mod metrics_service;

pub use metrics_service::MetricsServiceImpl;
