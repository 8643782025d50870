//! Server-specific constants

// ============================================================================
// RESPONSE ENVELOPE
// ============================================================================

/// Hint attached to acquisition failures
pub const ACQUISITION_SUGGESTION: &str =
    "Ensure the host provides the `top` command (procps) and that it can run in batch mode";

/// Status reported by `/health`
pub const HEALTH_STATUS_OPERATIONAL: &str = "operational";

// ============================================================================
// CORS
// ============================================================================

/// Allowed origins
pub const CORS_ALLOW_ORIGIN: &str = "*";

/// Allowed methods
pub const CORS_ALLOW_METHODS: &str = "GET, OPTIONS";

/// Allowed request headers
pub const CORS_ALLOW_HEADERS: &str = "*";
