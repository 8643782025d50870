//! Domain Services
//!
//! Interfaces for the operations the outer layers drive.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`MetricsServiceInterface`] | Collect, persist and read back metrics snapshots |

/// Metrics collection service interface
pub mod metrics;

pub use metrics::MetricsServiceInterface;
