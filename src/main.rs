//! app-web
//!
//! Serves the landing page on `GET /` and relays the backend's health on
//! `GET /health`.
//!
//! ```text
//!     Client ──▶ listener ──▶ axum router ──┬─▶ GET /        static page
//!                                           ├─▶ GET /health  ──▶ backend /health
//!                                           └─▶ *            404
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use app_web::config::{self, AppConfig};
use app_web::observability::{logging, metrics};
use app_web::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "app-web")]
#[command(about = "Landing page and backend health proxy", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => AppConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "app-web starting");
    tracing::info!(
        config_file = ?cli.config,
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.health_url,
        upstream_timeout_secs = ?config.upstream.timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    HttpServer::new(config)?.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
