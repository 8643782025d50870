//! API response models

use chrono::{DateTime, SecondsFormat, Utc};
use hostmon_domain::error::Error;
use hostmon_domain::value_objects::MetricsSnapshot;
use serde::{Deserialize, Serialize};

use crate::constants::{ACQUISITION_SUGGESTION, HEALTH_STATUS_OPERATIONAL};

/// Envelope wrapping every `/metrics` response
///
/// ```json
/// {"status": "success", "data": {"timestamp": "...", "cpu": {...}, "memory": {...}}}
/// {"status": "error", "message": "...", "suggestion": "..."}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MetricsEnvelope {
    /// A snapshot was produced
    Success {
        /// The snapshot
        data: MetricsSnapshot,
    },
    /// The request failed
    Error {
        /// Human-readable failure
        message: String,
        /// What the operator can do about it
        #[serde(default, skip_serializing_if = "Option::is_none")]
        suggestion: Option<String>,
    },
}

impl MetricsEnvelope {
    /// Wrap a snapshot
    pub fn success(data: MetricsSnapshot) -> Self {
        Self::Success { data }
    }

    /// Error envelope without a suggestion
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            suggestion: None,
        }
    }

    /// Error envelope for a failed collection
    ///
    /// Acquisition failures carry a suggestion; parse failures do not, since
    /// the command did run.
    pub fn from_error(error: &Error) -> Self {
        let suggestion = matches!(error, Error::Acquisition { .. })
            .then(|| ACQUISITION_SUGGESTION.to_string());
        Self::Error {
            message: error.to_string(),
            suggestion,
        }
    }
}

/// `/health` response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `operational` while the process serves requests
    pub status: String,
    /// Process uptime in seconds
    pub uptime: f64,
    /// Time of the response, ISO-8601 with milliseconds
    pub timestamp: String,
}

impl HealthResponse {
    /// Health at `now` for a process up for `uptime_secs`
    pub fn operational(uptime_secs: f64, now: DateTime<Utc>) -> Self {
        Self {
            status: HEALTH_STATUS_OPERATIONAL.to_string(),
            uptime: uptime_secs,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
