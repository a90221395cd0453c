//! Startup orchestration.
//!
//! Subsystems start in order: metrics exporter, die and router, then the
//! listener. Any failure aborts startup.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::DiceConfig;
use crate::http::DiceServer;
use crate::observability::metrics;

/// Errors that abort startup or serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid address `{address}`: {source}")]
    Address {
        address: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        source: std::io::Error,
    },

    #[error("failed to install metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

fn parse_addr(address: &str) -> Result<SocketAddr, StartupError> {
    address.parse().map_err(|source| StartupError::Address {
        address: address.to_string(),
        source,
    })
}

/// Start every subsystem and serve until `shutdown` fires.
pub async fn run(
    config: DiceConfig,
    shutdown: broadcast::Receiver<()>,
) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let addr = parse_addr(&config.observability.metrics_address)?;
        metrics::init_metrics(addr)?;
    }

    let address = parse_addr(&config.listener.bind_address)?;
    let server = DiceServer::new(&config);

    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    tracing::info!(
        address = %listener.local_addr()?,
        initial_faces = config.dice.initial_faces,
        seeded = config.dice.seed.is_some(),
        "Listening for connections"
    );

    server.run(listener, shutdown).await?;
    Ok(())
}
