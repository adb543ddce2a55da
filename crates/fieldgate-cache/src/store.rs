//! Cache store abstraction.

use crate::CacheResult;
use async_trait::async_trait;
use shaku::Interface;
use std::time::Duration;

/// Key/value cache store with tag-grouped invalidation and per-key TTL.
///
/// Tags group every key belonging to one logical namespace so they can be
/// invalidated together without enumerating keys. Implementations must
/// support concurrent readers and writers without a global lock around
/// get/set.
///
/// Uses JSON strings for type-erased storage to maintain dyn-compatibility.
#[async_trait]
pub trait CacheStore: Interface + Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> CacheResult<Option<String>>;

    /// Set a raw JSON value with a TTL, registering the key under each tag.
    async fn set_raw(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
        tags: &[&str],
    ) -> CacheResult<()>;

    /// Evict every key registered under the tag.
    ///
    /// Returns the number of keys evicted.
    async fn forget_tag(&self, tag: &str) -> CacheResult<u64>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
#[async_trait]
pub trait CacheStoreExt: CacheStore {
    /// Get a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> CacheResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
        tags: &[&str],
    ) -> CacheResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl, tags).await
    }

    /// Get a value or compute and cache it if not present.
    async fn get_or_set<T, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        tags: &[&str],
        factory: F,
    ) -> CacheResult<T>
    where
        T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: std::future::Future<Output = CacheResult<T>> + Send,
    {
        if let Some(cached) = self.get::<T>(key).await? {
            return Ok(cached);
        }

        let value = factory().await?;

        // Cache it (ignore errors as the value is still valid)
        let _ = self.set(key, &value, ttl, tags).await;

        Ok(value)
    }
}

// Blanket implementation for all CacheStore implementations
impl<T: CacheStore + ?Sized> CacheStoreExt for T {}
