//! Infrastructure layer constants
//!
//! Configuration file lookup, environment naming and server defaults.
//! Monitor and snapshot defaults live in `hostmon_providers::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "hostmon.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "hostmon";

/// Environment variable prefix for configuration (`HOSTMON__SERVER__PORT`)
pub const CONFIG_ENV_PREFIX: &str = "HOSTMON";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Plain port variable honoured for compatibility with `PORT=8080 hostmon`
pub const LEGACY_PORT_ENV: &str = "PORT";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 3001;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "HOSTMON_LOG";

/// File name prefix used when `logging.file_output` has no stem
pub const DEFAULT_LOG_FILE_PREFIX: &str = "hostmon";
