//! # hostmon Server
//!
//! HTTP endpoint exposing the host's current CPU and memory utilization.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hostmon_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Default config lookup, configured port, serve forever
//!     run(None, None, false).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Endpoints
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/metrics` | GET | Fresh CPU and memory snapshot |
//! | `/health` | GET | Liveness with process uptime |

pub mod api;
pub mod constants;
pub mod init;
pub mod transport;

pub use init::run;
