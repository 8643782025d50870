//! Monitor command configuration

use hostmon_providers::constants::{
    DEFAULT_MONITOR_ARGS, DEFAULT_MONITOR_PROGRAM, DEFAULT_MONITOR_TIMEOUT_SECS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Monitor command configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Program to run
    pub program: String,

    /// Arguments passed to the program
    pub args: Vec<String>,

    /// Seconds before the command is killed
    pub timeout_secs: u64,
}

impl MonitorConfig {
    /// Timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_MONITOR_PROGRAM.to_string(),
            args: DEFAULT_MONITOR_ARGS.iter().map(ToString::to_string).collect(),
            timeout_secs: DEFAULT_MONITOR_TIMEOUT_SECS,
        }
    }
}
