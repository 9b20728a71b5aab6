//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), optional
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! Without a file, `AppConfig::default()` reproduces the built-in
//! constants: listen on `0.0.0.0:3000`, probe `http://127.0.0.1:5000/health`.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AppConfig, ListenerConfig, LogFormat, ObservabilityConfig, UpstreamConfig};
pub use validation::ValidationError;
