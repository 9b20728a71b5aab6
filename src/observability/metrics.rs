//! Metrics collection and exposition.
//!
//! # Metrics
//! - `web_requests_total` (counter): requests by method, route, status;
//!   unknown paths share the `unmatched` route label
//! - `web_request_duration_seconds` (histogram): latency by method, route
//! - `upstream_health_checks_total` (counter): probe outcomes
//!   (`healthy`, `unhealthy`, `unreachable`)
//! - `upstream_healthy` (gauge): 1=healthy, 0=unhealthy at the last probe
//!
//! Recording is a no-op until a recorder is installed with `init_metrics`.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one served request.
pub fn record_request(method: &str, status: u16, route: &str, start: Instant) {
    counter!(
        "web_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        "web_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record the outcome of one upstream probe.
pub fn record_upstream_check(outcome: &'static str) {
    counter!("upstream_health_checks_total", "outcome" => outcome).increment(1);
}

pub fn record_upstream_health(healthy: bool) {
    gauge!("upstream_healthy").set(if healthy { 1.0 } else { 0.0 });
}

/// `route` label for requests served by the fallback, so arbitrary paths
/// do not each create a new series.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Middleware recording request count and latency per matched route.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned());

    let response = next.run(request).await;

    record_request(&method, response.status().as_u16(), &route, start);
    response
}
