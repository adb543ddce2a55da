//! Redis-based cache store implementation.

use crate::{CacheError, CacheResult, CacheStore};
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool, Runtime};
use fieldgate_config::CacheSettings;
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default TTL for cached items (5 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Short TTL for fast-moving reads (1 minute).
pub const SHORT_TTL: Duration = Duration::from_secs(60);

/// Redis-based cache store.
///
/// Tag membership is kept in a Redis set per tag; `forget_tag` deletes every
/// member key and the set itself. Member references to already-expired keys
/// are harmless, deleting them is a no-op.
#[derive(Component)]
#[shaku(interface = CacheStore)]
pub struct RedisCacheStore {
    /// Redis connection pool.
    pool: Option<Arc<Pool>>,
}

impl RedisCacheStore {
    /// Create a new Redis cache store.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a no-op cache store (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    /// Create a store from the cache configuration section.
    ///
    /// Returns a disabled store when caching is off or no Redis URL is
    /// configured.
    pub fn from_settings(settings: &CacheSettings) -> CacheResult<Self> {
        if !settings.enabled {
            return Ok(Self::disabled());
        }
        let Some(url) = &settings.redis_url else {
            return Ok(Self::disabled());
        };

        let pool = deadpool_redis::Config::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| CacheError::Backend(format!("Failed to create Redis pool: {}", e)))?;

        Ok(Self::new(Arc::new(pool)))
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> CacheResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool
                .get()
                .await
                .map_err(|e| CacheError::Backend(format!("Failed to get Redis connection: {}", e))),
            None => Err(CacheError::Disabled),
        }
    }

    fn tag_set_key(tag: &str) -> String {
        format!("{}:members", tag)
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> CacheResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| CacheError::Backend(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
        tags: &[&str],
    ) -> CacheResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| CacheError::Backend(format!("Failed to set key '{}': {}", key, e)))?;

        for tag in tags {
            conn.sadd::<_, _, ()>(Self::tag_set_key(tag), key)
                .await
                .map_err(|e| {
                    CacheError::Backend(format!("Failed to tag key '{}' with '{}': {}", key, tag, e))
                })?;
        }

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn forget_tag(&self, tag: &str) -> CacheResult<u64> {
        if !self.is_enabled() {
            return Ok(0);
        }

        let mut conn = self.get_conn().await?;
        let set_key = Self::tag_set_key(tag);

        let members: Vec<String> = conn
            .smembers(&set_key)
            .await
            .map_err(|e| CacheError::Backend(format!("Failed to read tag '{}': {}", tag, e)))?;

        let mut deleted: i64 = 0;
        if !members.is_empty() {
            deleted = conn
                .del(&members)
                .await
                .map_err(|e| CacheError::Backend(format!("Failed to delete keys: {}", e)))?;
        }

        conn.del::<_, ()>(&set_key)
            .await
            .map_err(|e| CacheError::Backend(format!("Failed to delete tag '{}': {}", tag, e)))?;

        debug!("Forgot tag '{}': {} keys evicted", tag, deleted);
        Ok(deleted as u64)
    }
}
