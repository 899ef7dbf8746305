//! Vigil: a standalone liveness probe responder.
//!
//! This is the application entry point. It parses command line arguments,
//! loads configuration from a TOML file, initializes tracing, builds the
//! axum router with the probe middleware chain, and starts the HTTP server.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vigil::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER, SERVICE_BANNER};
use vigil::http::start_server;
use vigil::routes::create_router;

/// Vigil: liveness probe responder
#[derive(Parser, Debug)]
#[command(name = "vigil", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "vigil=debug,axum=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Config comes first so logging.format can shape the subscriber
    let config = AppConfig::load_or_default(&args.config)?;

    // Filter priority: CLI flag over RUST_LOG over the built-in default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    init_tracing(&log_filter, &config.logging.format);

    if Path::new(&args.config).exists() {
        tracing::info!(path = %args.config, "Loaded configuration");
    } else {
        tracing::info!(path = %args.config, "No config file found, using built-in defaults");
    }

    tracing::info!("Starting {}", SERVICE_BANNER);

    // Build the middleware chain and serve it
    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}

fn init_tracing(filter: &str, format: &str) {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    if format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
