//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with both dice handlers
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve on a bound listener until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, Mutex};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::DiceConfig;
use crate::dice::{Die, StandardDie};
use crate::http::handlers::{cheat_dice, roll_dice};
use crate::http::request::{UuidRequestId, X_REQUEST_ID};

/// Application state injected into handlers.
///
/// The die is shared by every request and locked for the whole
/// set-operate-read sequence.
pub struct AppState<D> {
    pub die: Arc<Mutex<D>>,
}

impl<D> AppState<D> {
    pub fn new(die: D) -> Self {
        Self {
            die: Arc::new(Mutex::new(die)),
        }
    }
}

impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            die: Arc::clone(&self.die),
        }
    }
}

/// Build the Axum router with all middleware layers.
///
/// `/` also serves as the fallback, so any unrouted path rolls the die.
#[allow(deprecated)]
pub fn build_router<D: Die + 'static>(state: AppState<D>, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", any(roll_dice::<D>))
        .route("/cheat", any(cheat_dice::<D>))
        .fallback(roll_dice::<D>)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                        let request_id = request
                            .headers()
                            .get(X_REQUEST_ID)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("unknown");
                        tracing::info_span!(
                            "request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id
                        )
                    }),
                )
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::new(request_timeout)),
        )
}

/// HTTP server for the dice service.
pub struct DiceServer {
    router: Router,
}

impl DiceServer {
    /// Create a server around a freshly constructed die.
    pub fn new(config: &DiceConfig) -> Self {
        let die = match config.dice.seed {
            Some(seed) => StandardDie::with_seed(config.dice.initial_faces, seed),
            None => StandardDie::new(config.dice.initial_faces),
        };
        Self::with_die(die, config)
    }

    /// Create a server around any die implementation.
    pub fn with_die<D: Die + 'static>(die: D, config: &DiceConfig) -> Self {
        let timeout = Duration::from_secs(config.timeouts.request_secs);
        Self {
            router: build_router(AppState::new(die), timeout),
        }
    }

    /// Run the server until the shutdown receiver fires (or its sender drops).
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
