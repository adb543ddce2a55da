//! Cache-internal error types.
//!
//! These never cross the repository API: the caching decorator degrades to
//! the wrapped call on any store failure, because cached values are
//! re-derivable projections of the remote source of truth.

use thiserror::Error;

/// Errors raised by cache store implementations.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The backing store failed.
    #[error("Cache backend error: {0}")]
    Backend(String),

    /// The store is disabled and cannot serve the request.
    #[error("Cache is disabled")]
    Disabled,

    /// A value could not be (de)serialized for storage.
    #[error("Cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A specialized `Result` type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;
