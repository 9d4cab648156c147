//! recipegen-server - HTTP API for recipe search, saved recipes and grocery lists

use anyhow::{Context, Result};
use clap::Parser;
use recipegen_core::config::Config;
use recipegen_telemetry::TelemetryConfig;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

mod error;
mod extract;
mod routes;
mod state;

use state::AppState;

/// Serve the recipegen HTTP API
#[derive(Parser)]
#[command(name = "recipegen-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults to ./recipegen.toml when present)
    #[arg(short, long)]
    config: Option<String>,

    /// Listen address, overrides server.bind
    #[arg(short, long, env = "RECIPEGEN_BIND")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    let logging = &config.schema.logging;
    recipegen_telemetry::init_with_config(TelemetryConfig::new(logging.level.clone(), logging.json))?;

    if let Some(path) = &config.path {
        info!(%path, "Loaded configuration");
    }
    if let Some(bind) = args.bind {
        config.schema.server.bind = bind;
    }

    let address = config.schema.server.bind.clone();
    let state = AppState::from_config(config.schema).context("Failed to initialize server state")?;
    let app = routes::router(Arc::new(state));

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!(%address, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!(error = %e, "Failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_bind_override() {
        let args = Args::try_parse_from(["recipegen-server", "--bind", "127.0.0.1:9000"]).unwrap();
        assert_eq!(args.bind.as_deref(), Some("127.0.0.1:9000"));
        assert!(args.config.is_none());
    }
}
