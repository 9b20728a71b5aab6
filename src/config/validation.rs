//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. Every problem is
//! reported, not just the first one found.

use std::net::SocketAddr;

use axum::http::Uri;

use crate::config::schema::AppConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field}: `{value}` is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("upstream.health_url: `{value}` {reason}")]
    InvalidHealthUrl { value: String, reason: &'static str },

    #[error("upstream.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("observability.log_level: unknown level `{0}`")]
    UnknownLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if let Err(e) = parse_health_url(&config.upstream.health_url) {
        errors.push(e);
    }

    if config.upstream.timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.observability.log_level.parse::<tracing::Level>().is_err() {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parse the upstream health URL. Only plain `http://` with a host is
/// accepted since the outbound client has no TLS connector.
pub fn parse_health_url(value: &str) -> Result<Uri, ValidationError> {
    let invalid = |reason| ValidationError::InvalidHealthUrl {
        value: value.to_string(),
        reason,
    };

    let uri: Uri = value.parse().map_err(|_| invalid("is not a valid URI"))?;

    if uri.scheme_str() != Some("http") {
        return Err(invalid("must use the http scheme"));
    }
    if uri.host().is_none() {
        return Err(invalid("has no host"));
    }

    Ok(uri)
}
