//! Application configuration structures.

use fieldgate_core::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Remote field-service API configuration.
    #[serde(default)]
    pub remote: RemoteApiConfig,

    /// Cache configuration.
    #[serde(default)]
    pub cache: CacheSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "fieldgate".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Remote field-service API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteApiConfig {
    /// Base URL of the remote API.
    pub base_url: String,
    /// Authentication key sent with every request.
    pub auth_key: String,
    /// Authentication token sent with every request.
    pub auth_token: String,
    /// Request timeout in seconds, owned by the HTTP transport.
    pub timeout_secs: u64,
    /// Page size used when exhaustively walking search results.
    pub default_page_size: usize,
}

impl Default for RemoteApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            auth_key: String::new(),
            auth_token: String::new(),
            timeout_secs: 30,
            default_page_size: 100,
        }
    }
}

impl RemoteApiConfig {
    /// Returns the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Cache configuration.
///
/// TTLs are declared in seconds as signed integers so that a negative value
/// coming from a loosely-typed source is caught by validation at startup
/// instead of silently wrapping. A TTL of zero disables caching for that
/// method without changing call semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Master switch for the caching layer.
    pub enabled: bool,
    /// Redis connection URL; absent means the in-process store is used.
    pub redis_url: Option<String>,
    /// Default TTL in seconds for cached repository results.
    pub default_ttl_secs: i64,
    /// TTL override for `find` results.
    pub find_ttl_secs: Option<i64>,
    /// TTL override for `find_many` results.
    pub find_many_ttl_secs: Option<i64>,
    /// TTL override for `search` results.
    pub search_ttl_secs: Option<i64>,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            redis_url: None,
            default_ttl_secs: 300,
            find_ttl_secs: None,
            find_many_ttl_secs: None,
            search_ttl_secs: None,
        }
    }
}

impl CacheSettings {
    /// Returns the effective TTL in seconds for a method-level override.
    ///
    /// Callers must have validated the settings first; see
    /// [`crate::validate_config`].
    #[must_use]
    pub fn ttl_secs_for(&self, override_secs: Option<i64>) -> u64 {
        let secs = override_secs.unwrap_or(self.default_ttl_secs);
        u64::try_from(secs).unwrap_or(0)
    }
}
