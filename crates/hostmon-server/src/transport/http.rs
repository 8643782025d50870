//! HTTP transport
//!
//! Binds the metrics API to an address with Rocket and optionally attaches
//! permissive CORS headers.

use crate::api::handlers::{MetricsState, preflight};
use crate::api::routes::metrics_rocket;
use crate::constants::{CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, CORS_ALLOW_ORIGIN};
use hostmon_infrastructure::config::ServerConfig;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Build, Request, Response, Rocket, routes};
use tracing::info;

/// HTTP transport configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransportConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Enable CORS for browser access
    pub enable_cors: bool,
}

impl HttpTransportConfig {
    /// Create config for localhost with specified port
    pub fn localhost(port: u16) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port,
            enable_cors: true,
        }
    }
}

impl From<&ServerConfig> for HttpTransportConfig {
    fn from(server: &ServerConfig) -> Self {
        Self {
            host: server.host.clone(),
            port: server.port,
            enable_cors: server.cors,
        }
    }
}

/// HTTP transport server
pub struct HttpTransport {
    config: HttpTransportConfig,
    state: MetricsState,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(config: HttpTransportConfig, state: MetricsState) -> Self {
        Self { config, state }
    }

    /// Build the Rocket application
    pub fn rocket(&self) -> Rocket<Build> {
        let mut rocket = metrics_rocket(self.state.clone());

        if self.config.enable_cors {
            rocket = rocket.mount("/", routes![preflight]).attach(Cors);
        }

        rocket
    }

    /// Serve until Rocket shuts down (Ctrl+C or SIGTERM)
    pub async fn start(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!(
            host = %self.config.host,
            port = self.config.port,
            cors = self.config.enable_cors,
            "HTTP transport listening"
        );

        let figment = rocket::Config::figment()
            .merge(("address", self.config.host.clone()))
            .merge(("port", self.config.port));

        self.rocket()
            .configure(figment)
            .launch()
            .await
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

        Ok(())
    }
}

/// CORS Fairing for Rocket
///
/// Adds CORS headers to all responses to allow browser access.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", CORS_ALLOW_ORIGIN));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            CORS_ALLOW_METHODS,
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            CORS_ALLOW_HEADERS,
        ));
    }
}
