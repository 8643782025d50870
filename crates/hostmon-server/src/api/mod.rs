//! HTTP API
//!
//! Rocket handlers, response models and route assembly.

pub mod handlers;
pub mod models;
pub mod routes;

pub use handlers::MetricsState;
pub use models::{HealthResponse, MetricsEnvelope};
pub use routes::metrics_rocket;
