//! Configuration validation module.
//!
//! Provides validation for all configuration values, failing fast on invalid
//! configuration rather than at runtime.

use crate::AppConfig;
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    /// Remote API base URL is empty.
    MissingBaseUrl,
    /// Remote API base URL does not parse.
    InvalidBaseUrl { message: String },
    /// Timeout value must be positive.
    NonPositiveTimeout { value: u64 },
    /// Page size must be positive.
    NonPositivePageSize { value: usize },
    /// A cache TTL is negative.
    NegativeTtl { name: &'static str, value: i64 },
    /// Redis URL does not parse.
    InvalidRedisUrl { message: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBaseUrl => {
                write!(f, "Remote API base URL is required")
            }
            Self::InvalidBaseUrl { message } => {
                write!(f, "Invalid remote API base URL: {}", message)
            }
            Self::NonPositiveTimeout { value } => {
                write!(f, "Remote API timeout must be positive, got {}", value)
            }
            Self::NonPositivePageSize { value } => {
                write!(f, "Default page size must be positive, got {}", value)
            }
            Self::NegativeTtl { name, value } => {
                write!(
                    f,
                    "Cache TTL '{}' must not be negative, got {} (use 0 to disable caching)",
                    name, value
                )
            }
            Self::InvalidRedisUrl { message } => {
                write!(f, "Invalid Redis URL: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Validates the full configuration, collecting every violation.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
    let mut errors = Vec::new();

    if config.remote.base_url.is_empty() {
        errors.push(ConfigValidationError::MissingBaseUrl);
    } else if let Err(e) = Url::parse(&config.remote.base_url) {
        errors.push(ConfigValidationError::InvalidBaseUrl {
            message: e.to_string(),
        });
    }

    if config.remote.timeout_secs == 0 {
        errors.push(ConfigValidationError::NonPositiveTimeout { value: 0 });
    }

    if config.remote.default_page_size == 0 {
        errors.push(ConfigValidationError::NonPositivePageSize { value: 0 });
    }

    validate_ttl(&mut errors, "default_ttl_secs", Some(config.cache.default_ttl_secs));
    validate_ttl(&mut errors, "find_ttl_secs", config.cache.find_ttl_secs);
    validate_ttl(&mut errors, "find_many_ttl_secs", config.cache.find_many_ttl_secs);
    validate_ttl(&mut errors, "search_ttl_secs", config.cache.search_ttl_secs);

    if let Some(redis_url) = &config.cache.redis_url {
        if let Err(e) = Url::parse(redis_url) {
            errors.push(ConfigValidationError::InvalidRedisUrl {
                message: e.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_ttl(errors: &mut Vec<ConfigValidationError>, name: &'static str, value: Option<i64>) {
    if let Some(value) = value {
        if value < 0 {
            errors.push(ConfigValidationError::NegativeTtl { name, value });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_negative_ttl_is_rejected() {
        let mut config = AppConfig::default();
        config.cache.search_ttl_secs = Some(-5);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ConfigValidationError::NegativeTtl {
            name: "search_ttl_secs",
            value: -5,
        }));
    }

    #[test]
    fn test_zero_ttl_is_valid() {
        let mut config = AppConfig::default();
        config.cache.default_ttl_secs = 0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let mut config = AppConfig::default();
        config.remote.base_url = "not a url".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ConfigValidationError::InvalidBaseUrl { .. }
        ));
    }

    #[test]
    fn test_missing_base_url_is_rejected() {
        let mut config = AppConfig::default();
        config.remote.base_url = String::new();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ConfigValidationError::MissingBaseUrl));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut config = AppConfig::default();
        config.remote.timeout_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ConfigValidationError::NonPositiveTimeout { value: 0 }));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigValidationError::NegativeTtl {
            name: "find_ttl_secs",
            value: -1,
        };
        let rendered = err.to_string();
        assert!(rendered.contains("find_ttl_secs"));
        assert!(rendered.contains("-1"));
    }
}
