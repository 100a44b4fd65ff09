//! Metrics collection and exposition.
//!
//! # Metrics
//! - `trip_requests_total` (counter): requests by route, status
//! - `trip_request_duration_seconds` (histogram): latency by route
//! - `trip_dataset_records` (gauge): rows held in memory
//!
//! # Design Decisions
//! - Recording is always on; without an installed recorder it is a no-op
//! - The Prometheus exporter only starts when enabled in config

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one finished request.
pub fn record_request(route: &str, status: u16, start: Instant) {
    let route = route.to_owned();
    metrics::counter!(
        "trip_requests_total",
        "route" => route.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("trip_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

/// Publish the size of the loaded dataset.
pub fn record_dataset(records: usize) {
    metrics::gauge!("trip_dataset_records").set(records as f64);
}
