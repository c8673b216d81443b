use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use klant_gateway::config;
use klant_gateway::lifecycle::Shutdown;
use klant_gateway::observability::{logging, metrics};
use klant_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "klant-gateway", version)]
#[command(about = "Versioned customer-interaction API gateway", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Built-in defaults are used
    /// when omitted; KLANT_* environment variables override both.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = config::load_config(cli.config.as_deref())?;
    logging::init(&config.observability);

    tracing::info!(
        service = %config.service.name,
        environment = %config.service.environment,
        bind_address = %config.listener.bind_address,
        components = config.components.len(),
        "configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(address) => metrics::init(address),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "failed to parse metrics address"
                );
            }
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
