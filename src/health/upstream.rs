//! One-shot probe of the backend health endpoint.
//!
//! # Responsibilities
//! - Issue a single GET to the configured health URL per invocation
//! - Follow up to `MAX_REDIRECTS` redirects, judging the final response
//! - Convert every failure into a `ProbeError` carrying a readable reason
//!
//! No retries, no caching. A timeout applies only when configured and covers
//! the whole redirect chain.

use std::error::Error as StdError;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode, Uri};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::time;
use tower::ServiceExt;
use tower_http::follow_redirect::{policy::Limited, FollowRedirect};

use crate::config::validation::{parse_health_url, ValidationError};
use crate::config::UpstreamConfig;
use crate::health::report::{HealthReport, HealthStatus};
use crate::observability::metrics;

/// Why the upstream call did not complete.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("failed to build upstream request: {0}")]
    Request(#[from] axum::http::Error),

    #[error("{0}")]
    Transport(String),

    #[error("upstream did not respond within {0:?}")]
    Timeout(Duration),

    #[error("upstream exceeded {0} redirects")]
    TooManyRedirects(usize),
}

/// Redirects followed before giving up.
pub const MAX_REDIRECTS: usize = 20;

type UpstreamClient = FollowRedirect<Client<HttpConnector, Body>, Limited>;

impl From<hyper_util::client::legacy::Error> for ProbeError {
    fn from(err: hyper_util::client::legacy::Error) -> Self {
        ProbeError::Transport(error_chain(&err))
    }
}

/// Render an error followed by its sources, e.g.
/// `client error (Connect): tcp connect error: Connection refused (os error 111)`.
fn error_chain(err: &dyn StdError) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

/// The redirect policy stops at the limit and hands back the last redirect;
/// a response that still points elsewhere means the chain never ended.
fn final_status<B>(response: &Response<B>) -> Result<StatusCode, ProbeError> {
    let status = response.status();
    if status.is_redirection() && response.headers().contains_key(header::LOCATION) {
        return Err(ProbeError::TooManyRedirects(MAX_REDIRECTS));
    }
    Ok(status)
}

/// Forwards health checks to the backend and relays a simplified verdict.
#[derive(Clone)]
pub struct HealthProxy {
    uri: Uri,
    timeout: Option<Duration>,
    client: UpstreamClient,
}

impl HealthProxy {
    pub fn new(uri: Uri, timeout: Option<Duration>) -> Self {
        let client = FollowRedirect::with_policy(
            Client::builder(TokioExecutor::new()).build(HttpConnector::new()),
            Limited::new(MAX_REDIRECTS),
        );

        Self {
            uri,
            timeout,
            client,
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, ValidationError> {
        let uri = parse_health_url(&config.health_url)?;
        Ok(Self::new(uri, config.timeout_secs.map(Duration::from_secs)))
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Perform the outbound call and return the upstream status code.
    pub async fn probe(&self) -> Result<StatusCode, ProbeError> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(self.uri.clone())
            .header(header::USER_AGENT, concat!("app-web/", env!("CARGO_PKG_VERSION")))
            .body(Body::empty())?;

        let call = self.client.clone().oneshot(request);
        let response = match self.timeout {
            Some(limit) => time::timeout(limit, call)
                .await
                .map_err(|_| ProbeError::Timeout(limit))??,
            None => call.await?,
        };

        final_status(&response)
    }

    /// Probe the upstream and map the outcome to a response.
    pub async fn check(&self) -> (StatusCode, HealthReport) {
        let result = self.probe().await;

        match &result {
            Ok(status) if status.is_success() => {
                tracing::debug!(upstream = %self.uri, status = %status, "Upstream healthy");
                metrics::record_upstream_check("healthy");
            }
            Ok(status) => {
                tracing::warn!(upstream = %self.uri, status = %status, "Upstream returned non-success status");
                metrics::record_upstream_check("unhealthy");
            }
            Err(e) => {
                tracing::warn!(upstream = %self.uri, error = %e, "Upstream unreachable");
                metrics::record_upstream_check("unreachable");
            }
        }

        let (status, report) = HealthReport::from_probe(&result);
        metrics::record_upstream_health(report.status == HealthStatus::Healthy);
        (status, report)
    }
}
