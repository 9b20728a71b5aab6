//! Health verdict returned to callers of `GET /health`.

use axum::http::StatusCode;
use serde::Serialize;

use crate::health::upstream::ProbeError;

/// Simplified upstream verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// JSON body of the health endpoint.
///
/// `error` is only present when the upstream call did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthReport {
    pub fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            error: None,
        }
    }

    pub fn unhealthy(error: Option<String>) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            error,
        }
    }

    /// Map the outcome of one upstream probe to the response status and body.
    pub fn from_probe(result: &Result<StatusCode, ProbeError>) -> (StatusCode, Self) {
        match result {
            Ok(status) if status.is_success() => (StatusCode::OK, Self::healthy()),
            Ok(_) => (StatusCode::INTERNAL_SERVER_ERROR, Self::unhealthy(None)),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Self::unhealthy(Some(e.to_string())),
            ),
        }
    }
}
