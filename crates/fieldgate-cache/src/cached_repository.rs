//! Caching decorator over the generic resource repository.

use crate::{keys, CacheStore, CacheStoreExt};
use fieldgate_config::CacheSettings;
use fieldgate_core::{FieldgateResult, OfficeId};
use fieldgate_remote::ResourceClient;
use fieldgate_repository::{RemoteResource, ResourceRepository};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Per-method time-to-live configuration for one decorated repository.
///
/// A TTL of zero disables caching for that method without changing call
/// semantics.
#[derive(Debug, Clone, Copy)]
pub struct CachePolicy {
    pub find_ttl: Duration,
    pub find_many_ttl: Duration,
    pub search_ttl: Duration,
}

impl CachePolicy {
    /// The library-wide default TTL.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

    /// A policy that caches nothing.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            find_ttl: Duration::ZERO,
            find_many_ttl: Duration::ZERO,
            search_ttl: Duration::ZERO,
        }
    }

    /// Builds a policy from validated cache settings.
    #[must_use]
    pub fn from_settings(settings: &CacheSettings) -> Self {
        if !settings.enabled {
            return Self::disabled();
        }
        Self {
            find_ttl: Duration::from_secs(settings.ttl_secs_for(settings.find_ttl_secs)),
            find_many_ttl: Duration::from_secs(settings.ttl_secs_for(settings.find_many_ttl_secs)),
            search_ttl: Duration::from_secs(settings.ttl_secs_for(settings.search_ttl_secs)),
        }
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            find_ttl: Self::DEFAULT_TTL,
            find_many_ttl: Self::DEFAULT_TTL,
            search_ttl: Self::DEFAULT_TTL,
        }
    }
}

/// Transparent caching wrapper around a [`ResourceRepository`].
///
/// The decorator enumerates exactly the methods it wraps (`find`,
/// `find_many`, `search`); each builds its cache key from the method
/// identity, the tenant context, and the declared argument list in call
/// order. All keys of one method share one tag, so `invalidate_*` evicts
/// every argument variant of that method at once.
///
/// Store failures degrade: a failed read counts as a miss, a failed write is
/// logged and dropped. Concurrent misses for the same key may both invoke
/// the wrapped repository and both write; the race is benign because wrapped
/// operations are pure reads, so no single-flight de-duplication is applied.
pub struct CachedResourceRepository<R, C, S>
where
    R: RemoteResource,
    C: ResourceClient,
    S: CacheStore,
{
    inner: ResourceRepository<R, C>,
    store: Arc<S>,
    policy: CachePolicy,
}

impl<R, C, S> CachedResourceRepository<R, C, S>
where
    R: RemoteResource,
    C: ResourceClient,
    S: CacheStore,
{
    /// Wraps a repository with the given store and policy.
    #[must_use]
    pub fn new(inner: ResourceRepository<R, C>, store: Arc<S>, policy: CachePolicy) -> Self {
        Self {
            inner,
            store,
            policy,
        }
    }

    /// Returns a copy scoped to the given office.
    #[must_use]
    pub fn with_tenant(&self, office_id: OfficeId) -> Self {
        Self {
            inner: self.inner.with_tenant(office_id),
            store: Arc::clone(&self.store),
            policy: self.policy,
        }
    }

    /// Returns a copy with a pagination window set.
    #[must_use]
    pub fn with_pagination(&self, page: usize, size: usize) -> Self {
        Self {
            inner: self.inner.with_pagination(page, size),
            store: Arc::clone(&self.store),
            policy: self.policy,
        }
    }

    /// Cached single-entity lookup; caches the not-found outcome too.
    pub async fn find(&self, id: i64) -> FieldgateResult<Option<R::Model>> {
        let ttl = self.policy.find_ttl;
        let Some((key, tag)) = self.entry_for("find", &id, ttl) else {
            return self.inner.find(id).await;
        };

        if let Some(cached) = self.read::<Option<R::Model>>(&key).await {
            return Ok(cached);
        }

        let result = self.inner.find(id).await?;
        self.write(&key, &tag, &result, ttl).await;
        Ok(result)
    }

    /// Cached multi-id fetch.
    pub async fn find_many(&self, ids: &[i64]) -> FieldgateResult<Vec<R::Model>> {
        let ttl = self.policy.find_many_ttl;
        let Some((key, tag)) = self.entry_for("find_many", &ids, ttl) else {
            return self.inner.find_many(ids).await;
        };

        if let Some(cached) = self.read::<Vec<R::Model>>(&key).await {
            return Ok(cached);
        }

        let result = self.inner.find_many(ids).await?;
        self.write(&key, &tag, &result, ttl).await;
        Ok(result)
    }

    /// Cached criteria search.
    pub async fn search(&self, criteria: R::Criteria) -> FieldgateResult<Vec<R::Model>> {
        let ttl = self.policy.search_ttl;
        let Some((key, tag)) = self.entry_for("search", &criteria, ttl) else {
            return self.inner.search(criteria).await;
        };

        if let Some(cached) = self.read::<Vec<R::Model>>(&key).await {
            return Ok(cached);
        }

        let result = self.inner.search(criteria).await?;
        self.write(&key, &tag, &result, ttl).await;
        Ok(result)
    }

    /// Evicts every cached `find` result for this resource.
    pub async fn invalidate_find(&self) -> u64 {
        self.forget("find").await
    }

    /// Evicts every cached `find_many` result for this resource.
    pub async fn invalidate_find_many(&self) -> u64 {
        self.forget("find_many").await
    }

    /// Evicts every cached `search` result for this resource.
    pub async fn invalidate_search(&self) -> u64 {
        self.forget("search").await
    }

    /// Evicts every cached result for this resource across all methods.
    pub async fn invalidate_all(&self) -> u64 {
        self.invalidate_find().await
            + self.invalidate_find_many().await
            + self.invalidate_search().await
    }

    /// Derives key and tag for one invocation, or `None` when caching is off
    /// for this method or the arguments cannot be serialized.
    fn entry_for<A: Serialize>(
        &self,
        method: &str,
        args: &A,
        ttl: Duration,
    ) -> Option<(String, String)> {
        if ttl.is_zero() || !self.store.is_enabled() {
            return None;
        }

        let args_json = match serde_json::to_string(&(self.inner.context(), args)) {
            Ok(json) => json,
            Err(e) => {
                warn!(resource = R::NAME, method, error = %e, "uncacheable arguments");
                return None;
            }
        };

        Some((
            keys::operation_key(R::NAME, method, &args_json),
            keys::method_tag(R::NAME, method),
        ))
    }

    async fn read<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> Option<T> {
        match self.store.get::<T>(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "cache read failed, treating as miss");
                None
            }
        }
    }

    async fn write<T: Serialize + Send + Sync>(&self, key: &str, tag: &str, value: &T, ttl: Duration) {
        if let Err(e) = self.store.set(key, value, ttl, &[tag]).await {
            warn!(key, error = %e, "cache write failed, result served uncached");
        }
    }

    async fn forget(&self, method: &str) -> u64 {
        match self.store.forget_tag(&keys::method_tag(R::NAME, method)).await {
            Ok(evicted) => evicted,
            Err(e) => {
                warn!(resource = R::NAME, method, error = %e, "tag invalidation failed");
                0
            }
        }
    }
}
