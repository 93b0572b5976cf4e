//! dockdemo: a minimal containerized web service.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from an optional TOML file, builds the Axum router and starts
//! the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dockdemo::config::{AppConfig, DEFAULT_LOG_FILTER};
use dockdemo::http::start_server;
use dockdemo::{create_router, AppState};

/// dockdemo: welcome and health endpoints for container deployments
#[derive(Parser, Debug)]
#[command(name = "dockdemo", version, about)]
struct Args {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Port to listen on, overriding the configuration file
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "dockdemo=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration before tracing so the log format is known
    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    }
    .with_port_override(args.port)?;

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        config = args.config.as_deref().unwrap_or("<defaults>"),
        host = %config.http.host,
        port = config.http.port,
        log_format = %config.logging.format,
        "Loaded configuration"
    );

    let http_config = config.http.clone();
    let state = AppState::new(config);
    let app = create_router(state);

    start_server(app, &http_config).await?;

    Ok(())
}
