//! Configuration loader
//!
//! Merges, in order of increasing precedence:
//! 1. `AppConfig::default()`
//! 2. The TOML file (explicit path, or the first `hostmon.toml` found)
//! 3. The plain `PORT` variable, mapped to `server.port`
//! 4. `HOSTMON__SECTION__KEY` environment variables

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    LEGACY_PORT_ENV,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use hostmon_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load and validate configuration from all sources
    pub fn load(&self) -> Result<AppConfig> {
        let app_config: AppConfig = self
            .figment()
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// The merged provider stack, before extraction
    pub fn figment(&self) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = self.resolved_config_path().filter(|path| path.exists()) {
            figment = figment.merge(Toml::file(config_path));
        }

        figment
            .merge(
                Env::raw()
                    .only(&[LEGACY_PORT_ENV])
                    .map(|_| "server.port".into()),
            )
            .merge(
                Env::prefixed(&format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix))
                    .split(CONFIG_ENV_SEPARATOR),
            )
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// File the loader reads: the explicit path, or the first default found
    ///
    /// An explicit path is returned even when it does not exist, so callers
    /// can report it once logging is up.
    pub fn resolved_config_path(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(Self::find_default_config_path)
    }

    /// Log which file the configuration came from
    ///
    /// Call after the subscriber is installed.
    pub fn log_source(&self) {
        match self.resolved_config_path() {
            Some(path) => log_config_loaded(&path, path.exists()),
            None => debug!("No configuration file found, using defaults"),
        }
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_monitor_config(config)?;
    validate_snapshot_config(config)?;
    validate_logging_config(config)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    if config.server.host.trim().is_empty() {
        return Err(Error::configuration("Server host cannot be empty"));
    }
    Ok(())
}

fn validate_monitor_config(config: &AppConfig) -> Result<()> {
    if config.monitor.program.trim().is_empty() {
        return Err(Error::configuration("Monitor program cannot be empty"));
    }
    if config.monitor.timeout_secs == 0 {
        return Err(Error::configuration("Monitor timeout cannot be 0"));
    }
    Ok(())
}

fn validate_snapshot_config(config: &AppConfig) -> Result<()> {
    if config.snapshot.enabled && config.snapshot.path.as_os_str().is_empty() {
        return Err(Error::configuration(
            "Snapshot path is required when snapshot persistence is enabled",
        ));
    }
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level).map(|_| ())
}
