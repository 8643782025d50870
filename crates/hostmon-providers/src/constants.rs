//! Provider Constants
//!
//! Defaults for the monitor command and the snapshot file. Configuration
//! overrides all of them.

use std::time::Duration;

// ============================================================================
// MONITOR COMMAND CONSTANTS
// ============================================================================

/// Monitor program invoked by default
pub const DEFAULT_MONITOR_PROGRAM: &str = "top";

/// Batch mode, one iteration
pub const DEFAULT_MONITOR_ARGS: &[&str] = &["-b", "-n", "1"];

/// Upper bound on one monitor invocation, in seconds
pub const DEFAULT_MONITOR_TIMEOUT_SECS: u64 = 10;

/// Upper bound on one monitor invocation
pub const DEFAULT_MONITOR_TIMEOUT: Duration = Duration::from_secs(DEFAULT_MONITOR_TIMEOUT_SECS);

/// Locale forced on the monitor so decimals use a dot separator
pub const MONITOR_LOCALE: &str = "C";

/// Longest stderr excerpt carried in an acquisition error, in characters
pub const STDERR_EXCERPT_MAX_CHARS: usize = 512;

// ============================================================================
// SNAPSHOT FILE CONSTANTS
// ============================================================================

/// Snapshot file written next to the working directory by default
pub const DEFAULT_SNAPSHOT_PATH: &str = "metrics.json";

/// Extension of the temporary sibling written before the rename
pub const SNAPSHOT_TEMP_EXTENSION: &str = "tmp";
