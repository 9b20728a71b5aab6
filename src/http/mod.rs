//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup)
//!     → request.rs (assign/propagate x-request-id, open span)
//!     → GET /       → pages.rs (static landing page)
//!     → GET /health → health::HealthProxy (one upstream call)
//!     → anything else → pages.rs (404)
//! ```

pub mod pages;
pub mod request;
pub mod server;

pub use request::{MakeRequestUuidV4, RequestIdExt, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
