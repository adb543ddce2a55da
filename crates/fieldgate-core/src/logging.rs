//! Logging initialization driven by configuration.

use crate::{FieldgateError, FieldgateResult};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `"info"` or `"fieldgate=debug,warn"`.
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON-formatted log lines instead of human-readable ones.
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Initializes the global tracing subscriber.
///
/// Honors `RUST_LOG` when set, falling back to the configured level.
pub fn init_logging(config: &LoggingConfig) -> FieldgateResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| FieldgateError::configuration(format!("Invalid log filter: {}", e)))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.json {
        builder
            .json()
            .try_init()
            .map_err(|e| FieldgateError::configuration(format!("Failed to init logging: {}", e)))
    } else {
        builder
            .try_init()
            .map_err(|e| FieldgateError::configuration(format!("Failed to init logging: {}", e)))
    }
}
