//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define service metrics (request counts, latency, upstream outcomes)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `profile_requests_total` (counter): inbound requests by route, method, status
//! - `profile_request_duration_seconds` (histogram): inbound latency distribution
//! - `profile_upstream_requests_total` (counter): Stack Exchange calls by endpoint, outcome
//! - `profile_upstream_duration_seconds` (histogram): Stack Exchange call latency
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Route label uses the matched pattern, not the raw path, to bound cardinality
//! - Upstream outcome label distinguishes ok/status/timeout/transport

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exposition endpoint and register metric metadata.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            describe_counter!(
                "profile_requests_total",
                "Total inbound requests by route, method, and status"
            );
            describe_histogram!(
                "profile_request_duration_seconds",
                metrics::Unit::Seconds,
                "Inbound request latency"
            );
            describe_counter!(
                "profile_upstream_requests_total",
                "Stack Exchange API calls by endpoint and outcome"
            );
            describe_histogram!(
                "profile_upstream_duration_seconds",
                metrics::Unit::Seconds,
                "Stack Exchange API call latency"
            );
            tracing::info!(address = %addr, "Metrics endpoint started");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to start metrics endpoint");
        }
    }
}

/// Axum middleware recording one counter and one histogram sample per request.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());
    let method = request.method().to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    counter!(
        "profile_requests_total",
        "route" => route.clone(),
        "method" => method,
        "status" => status
    )
    .increment(1);
    histogram!("profile_request_duration_seconds", "route" => route)
        .record(started.elapsed().as_secs_f64());

    response
}

/// Record the outcome of one Stack Exchange call.
pub fn record_upstream(endpoint: &'static str, outcome: impl Into<String>, started: Instant) {
    let outcome = outcome.into();
    counter!(
        "profile_upstream_requests_total",
        "endpoint" => endpoint,
        "outcome" => outcome.clone()
    )
    .increment(1);
    histogram!(
        "profile_upstream_duration_seconds",
        "endpoint" => endpoint,
        "outcome" => outcome
    )
    .record(started.elapsed().as_secs_f64());
}
