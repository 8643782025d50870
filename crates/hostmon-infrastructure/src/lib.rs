//! # hostmon Infrastructure
//!
//! Cross-cutting technical concerns for the hostmon service.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration loading and validation |
//! | [`logging`] | tracing subscriber setup |
//! | [`bootstrap`] | Wiring providers into the metrics service |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`constants`] | Configuration defaults |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{AppContext, init_app};
pub use config::{AppConfig, ConfigLoader};
