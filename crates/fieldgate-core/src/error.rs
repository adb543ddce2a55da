//! Unified error types for the access layer.

use thiserror::Error;

/// Unified error type for Fieldgate.
///
/// The four variants `TenantNotSet`, `UnsupportedOperation`, `Mapping`, and
/// `RemoteResource` form the closed taxonomy surfaced by repository calls.
/// `Configuration` can only arise while loading configuration at startup,
/// never from a repository call, and `Other` wraps errors from collaborators
/// outside this layer.
#[derive(Error, Debug)]
pub enum FieldgateError {
    /// An operation that requires a tenant was invoked without one.
    #[error("No tenant set for the current operation")]
    TenantNotSet,

    /// The resource does not support the requested operation.
    #[error("Operation '{operation}' is not supported for resource '{resource}'")]
    UnsupportedOperation {
        resource: &'static str,
        operation: &'static str,
    },

    /// A wire record could not be translated into a domain model.
    #[error("Mapping error for resource '{resource}': {message}")]
    Mapping { resource: String, message: String },

    /// The remote system failed in a way other than "entity not found".
    #[error("Remote resource error for '{resource}': {message}")]
    RemoteResource { resource: String, message: String },

    /// Configuration error (startup only).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FieldgateError {
    /// Returns the HTTP status code a consuming service would map this error to.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::UnsupportedOperation { .. } => 400,
            Self::Mapping { .. } | Self::RemoteResource { .. } => 502,
            Self::TenantNotSet | Self::Configuration(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::TenantNotSet => "TENANT_NOT_SET",
            Self::UnsupportedOperation { .. } => "UNSUPPORTED_OPERATION",
            Self::Mapping { .. } => "MAPPING_ERROR",
            Self::RemoteResource { .. } => "REMOTE_RESOURCE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates an unsupported-operation error.
    #[must_use]
    pub const fn unsupported(resource: &'static str, operation: &'static str) -> Self {
        Self::UnsupportedOperation {
            resource,
            operation,
        }
    }

    /// Creates a mapping error.
    #[must_use]
    pub fn mapping<R: Into<String>, M: Into<String>>(resource: R, message: M) -> Self {
        Self::Mapping {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Creates a mapping error for a single field of a wire record.
    #[must_use]
    pub fn mapping_field<R: Into<String>, M: Into<String>>(
        resource: R,
        field: &str,
        message: M,
    ) -> Self {
        Self::Mapping {
            resource: resource.into(),
            message: format!("field '{}': {}", field, message.into()),
        }
    }

    /// Creates a remote-resource error.
    #[must_use]
    pub fn remote<R: Into<String>, M: Into<String>>(resource: R, message: M) -> Self {
        Self::RemoteResource {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Checks if this error represents a failure of the remote system rather
    /// than a caller mistake.
    #[must_use]
    pub const fn is_remote_failure(&self) -> bool {
        matches!(self, Self::RemoteResource { .. } | Self::Mapping { .. })
    }
}
