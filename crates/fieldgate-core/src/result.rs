//! Result type aliases for Fieldgate.

use crate::FieldgateError;

/// A specialized `Result` type for Fieldgate operations.
pub type FieldgateResult<T> = Result<T, FieldgateError>;

/// A boxed future returning a `FieldgateResult`.
pub type BoxFuture<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = FieldgateResult<T>> + Send + 'a>>;
