//! Server Initialization
//!
//! Configuration loading, logging setup and the choice between serving HTTP
//! and printing a single snapshot.

use std::path::Path;

use hostmon_infrastructure::bootstrap::{AppContext, init_app};
use hostmon_infrastructure::config::ConfigLoader;
use hostmon_infrastructure::logging::init_logging;
use tracing::{info, warn};

use crate::api::handlers::MetricsState;
use crate::transport::http::{HttpTransport, HttpTransportConfig};

/// Run hostmon
///
/// `port` overrides the configured port. With `once`, one snapshot is
/// collected, persisted and printed as JSON instead of starting the server.
pub async fn run(
    config_path: Option<&Path>,
    port: Option<u16>,
    once: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let loader = config_loader(config_path);
    let mut config = loader.load()?;
    if let Some(port) = port {
        config.server.port = port;
    }
    init_logging(&config.logging)?;
    loader.log_source();

    let context = init_app(config)?;

    if once {
        print_snapshot(&context).await
    } else {
        serve(context).await
    }
}

/// Configuration loader for an optional explicit path
fn config_loader(config_path: Option<&Path>) -> ConfigLoader {
    match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    }
}

/// Serve the HTTP API until shutdown
async fn serve(context: AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let transport_config = HttpTransportConfig::from(&context.config.server);
    info!(
        host = %transport_config.host,
        port = transport_config.port,
        "Starting hostmon"
    );

    let state = MetricsState::new(context.metrics_service());
    HttpTransport::new(transport_config, state)
        .start()
        .await
        .map_err(|e| -> Box<dyn std::error::Error> { e })
}

/// Collect one snapshot, persist it and print it to stdout
async fn print_snapshot(context: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let service = context.metrics_service();
    let snapshot = service.collect().await?;

    if let Err(e) = service.persist(&snapshot).await {
        warn!(error = %e, "Failed to persist snapshot");
    }

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
