//! # Quill Telemetry
//!
//! Structured logging for Quill services, built on `tracing-subscriber`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quill_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     init_logging(&TelemetryConfig::from_env()).expect("logging");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `QUILL_SERVICE_NAME` | `quill` | Service name attached to startup logs |
//! | `QUILL_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `QUILL_JSON_LOGS` | `false` | JSON output instead of human-readable lines |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber was already installed
    #[error("Failed to install subscriber: {0}")]
    SubscriberInit(String),
}
