//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request path:
//!     → logging.rs (structured log events, one span per request)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Prometheus scrape endpoint (when enabled)
//! ```
//!
//! The request ID set in `http::request` is recorded on every span.

pub mod logging;
pub mod metrics;
