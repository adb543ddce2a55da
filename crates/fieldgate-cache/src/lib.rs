//! # Fieldgate Cache
//!
//! Read-through caching for the resource repositories: a [`CacheStore`]
//! abstraction with tag-grouped invalidation and per-key TTL, a Redis and an
//! in-process implementation, deterministic key derivation, and the explicit
//! [`CachedResourceRepository`] decorator.

pub mod cached_repository;
pub mod error;
pub mod keys;
pub mod memory_store;
pub mod redis_store;
pub mod store;

pub use cached_repository::*;
pub use error::*;
pub use memory_store::*;
pub use redis_store::*;
pub use store::*;
