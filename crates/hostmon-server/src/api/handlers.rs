//! Request handlers
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/metrics` | GET | Acquire, parse and return a fresh snapshot |
//! | `/health` | GET | Process liveness and uptime |

use hostmon_application::MetricsServiceInterface;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Request, State, catch, get, options};
use std::sync::Arc;
use std::time::Instant;

use super::models::{HealthResponse, MetricsEnvelope};

/// Handler state shared by every route
#[derive(Clone)]
pub struct MetricsState {
    /// Metrics collection service
    pub service: Arc<dyn MetricsServiceInterface>,
    /// Process start, for `/health` uptime
    pub started: Instant,
}

impl MetricsState {
    /// State starting the uptime clock now
    pub fn new(service: Arc<dyn MetricsServiceInterface>) -> Self {
        Self {
            service,
            started: Instant::now(),
        }
    }
}

/// Current CPU and memory utilization
///
/// Every request runs the monitor once; nothing is cached. The snapshot is
/// persisted in the background and a persistence failure does not change
/// the response.
#[get("/metrics")]
pub async fn get_metrics(
    state: &State<MetricsState>,
) -> Result<Json<MetricsEnvelope>, (Status, Json<MetricsEnvelope>)> {
    match state.service.record().await {
        Ok(snapshot) => Ok(Json(MetricsEnvelope::success(snapshot))),
        Err(e) => Err((
            Status::InternalServerError,
            Json(MetricsEnvelope::from_error(&e)),
        )),
    }
}

/// Process liveness
#[get("/health")]
pub fn health(state: &State<MetricsState>) -> Json<HealthResponse> {
    Json(HealthResponse::operational(
        state.started.elapsed().as_secs_f64(),
        chrono::Utc::now(),
    ))
}

/// CORS preflight for any path
#[options("/<_..>")]
pub fn preflight() -> Status {
    Status::NoContent
}

/// JSON body for unknown routes
#[catch(404)]
pub fn not_found(request: &Request<'_>) -> Json<MetricsEnvelope> {
    Json(MetricsEnvelope::error(format!(
        "No route for {} {}",
        request.method(),
        request.uri()
    )))
}
