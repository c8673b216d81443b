//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Expose a Prometheus-compatible metrics endpoint
//! - Track request counts and latencies site-wide
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by method, status
//! - `gateway_request_duration_seconds` (histogram): latency by method
//!
//! # Design Decisions
//! - Low-cardinality labels only (method, status)
//! - The exporter runs on its own listener, away from API traffic

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter on the given address.
pub fn init(address: SocketAddr) {
    match PrometheusBuilder::new()
        .with_http_listener(address)
        .install()
    {
        Ok(()) => {
            describe_counter!(
                "gateway_requests_total",
                "Total number of HTTP requests handled"
            );
            describe_histogram!(
                "gateway_request_duration_seconds",
                "HTTP request latency in seconds"
            );
            tracing::info!(%address, "metrics exporter started");
        }
        Err(error) => {
            tracing::error!(%error, "failed to install metrics exporter");
        }
    }
}

/// Record one handled request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    counter!(
        "gateway_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "gateway_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Pipeline stage feeding [`record_request`] for every response.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().as_str().to_owned();

    let response = next.run(request).await;
    record_request(&method, response.status().as_u16(), start);
    response
}
