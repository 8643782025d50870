//! hostmon - host CPU and memory utilization over HTTP
//!
//! Runs `top -b -n 1` on every `GET /metrics`, parses the CPU and memory
//! summary lines and answers with a normalized snapshot.

use clap::Parser;
use hostmon_server::run;

/// Command line interface for hostmon
#[derive(Parser, Debug)]
#[command(name = "hostmon")]
#[command(about = "Host CPU and memory utilization over HTTP")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Port to listen on, overriding configuration and `PORT`
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Print one snapshot as JSON and exit instead of serving
    #[arg(long)]
    pub once: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref(), cli.port, cli.once).await
}
