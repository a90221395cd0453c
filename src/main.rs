//! Dice API server.
//!
//! Serves `GET /` (roll) and `GET /cheat` (forced outcome) for an N-sided die.

use std::path::PathBuf;

use clap::Parser;

use dice_api::config::{load_config, validate_config, ConfigError, DiceConfig};
use dice_api::lifecycle::{self, shutdown_signal, Shutdown};
use dice_api::observability::logging;

#[derive(Parser)]
#[command(name = "dice-api", version)]
#[command(about = "HTTP service that rolls an N-sided die", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:8080).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => DiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init_logging(&config.observability);

    tracing::info!("dice-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            shutdown_signal().await;
            shutdown.trigger();
        }
    });

    lifecycle::run(config, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
