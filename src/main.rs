use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kpi_gateway::config;
use kpi_gateway::http::HttpServer;

#[derive(Parser)]
#[command(name = "kpi-gateway")]
#[command(about = "HTTP gateway for the KPI indicator backend", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kpi_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("kpi-gateway v0.1.0 starting");

    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        allowed_origin = %config.cors.allowed_origin,
        upload_soft_limit = config.upload.soft_limit_bytes,
        upload_hard_limit = config.upload.hard_limit_bytes,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
