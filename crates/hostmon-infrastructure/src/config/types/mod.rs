//! Configuration types
//!
//! One module per section of `hostmon.toml`.

mod app;
mod logging;
mod monitor;
mod server;
mod snapshot;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use monitor::MonitorConfig;
pub use server::ServerConfig;
pub use snapshot::SnapshotConfig;
