//! Metrics collection and exposition.
//!
//! # Metrics
//! - `dice_requests_total` (counter): requests by endpoint and status
//! - `dice_request_duration_seconds` (histogram): handler latency by endpoint

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const REQUESTS_TOTAL: &str = "dice_requests_total";
pub const REQUEST_DURATION: &str = "dice_request_duration_seconds";

/// Install the Prometheus exporter and its HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    describe_counter!(REQUESTS_TOTAL, Unit::Count, "Dice requests handled");
    describe_histogram!(REQUEST_DURATION, Unit::Seconds, "Dice request latency");

    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record the outcome of one request.
pub fn record_request(endpoint: &'static str, status: u16, start: Instant) {
    counter!(REQUESTS_TOTAL, "endpoint" => endpoint, "status" => status.to_string())
        .increment(1);
    histogram!(REQUEST_DURATION, "endpoint" => endpoint)
        .record(start.elapsed().as_secs_f64());
}
