//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! GET /health
//!     → upstream.rs (one GET to the backend health URL)
//!     → Ok(StatusCode) | Err(ProbeError)
//!     → report.rs (map to 200 healthy / 500 unhealthy[, error])
//! ```
//!
//! Every failure is contained in the response; nothing escapes the handler.

pub mod report;
pub mod upstream;

pub use report::{HealthReport, HealthStatus};
pub use upstream::{HealthProxy, ProbeError};
