//! Route assembly

use rocket::{Build, Rocket, catchers, routes};

use super::handlers::{MetricsState, get_metrics, health, not_found};

/// Rocket instance serving the metrics API
///
/// Routes:
/// - GET /metrics - Fresh snapshot in the response envelope
/// - GET /health - Uptime and timestamp
pub fn metrics_rocket(state: MetricsState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/", routes![get_metrics, health])
        .register("/", catchers![not_found])
}
