//! Main application configuration

use super::{LoggingConfig, MonitorConfig, ServerConfig, SnapshotConfig};
use serde::{Deserialize, Serialize};

/// Complete hostmon configuration
///
/// ```toml
/// [server]
/// host = "0.0.0.0"
/// port = 3001
/// cors = true
///
/// [monitor]
/// program = "top"
/// args = ["-b", "-n", "1"]
/// timeout_secs = 10
///
/// [snapshot]
/// enabled = true
/// path = "metrics.json"
///
/// [logging]
/// level = "info"
/// json_format = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server
    pub server: ServerConfig,
    /// Monitor command
    pub monitor: MonitorConfig,
    /// Persisted snapshot file
    pub snapshot: SnapshotConfig,
    /// Logging
    pub logging: LoggingConfig,
}
