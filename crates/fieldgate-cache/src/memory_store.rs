//! In-process cache store implementation.

use crate::{CacheResult, CacheStore};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};
use tracing::debug;

struct MemoryEntry {
    value: String,
    expires_at: Instant,
}

/// In-process cache store backed by `RwLock`ed maps.
///
/// Supports concurrent readers and writers; get and set each take one lock
/// briefly, there is no lock held across the two. Expired entries are dropped
/// lazily on read.
#[derive(Default)]
pub struct MemoryCacheStore {
    entries: RwLock<HashMap<String, MemoryEntry>>,
    tags: RwLock<HashMap<String, HashSet<String>>>,
}

impl MemoryCacheStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live (unexpired) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .values()
            .filter(|e| e.expires_at > now)
            .count()
    }

    /// Returns true if the store holds no live entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get_raw(&self, key: &str) -> CacheResult<Option<String>> {
        let expired = {
            let entries = self.entries.read();
            match entries.get(key) {
                None => {
                    debug!("Cache miss for key '{}'", key);
                    return Ok(None);
                }
                Some(entry) if entry.expires_at > Instant::now() => {
                    debug!("Cache hit for key '{}'", key);
                    return Ok(Some(entry.value.clone()));
                }
                Some(_) => true,
            }
        };

        if expired {
            self.entries.write().remove(key);
            debug!("Cache miss for key '{}' (expired)", key);
        }
        Ok(None)
    }

    async fn set_raw(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
        tags: &[&str],
    ) -> CacheResult<()> {
        let ttl = ttl.max(Duration::from_secs(1));
        self.entries.write().insert(
            key.to_string(),
            MemoryEntry {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );

        let mut tag_map = self.tags.write();
        for tag in tags {
            tag_map
                .entry((*tag).to_string())
                .or_default()
                .insert(key.to_string());
        }

        debug!("Cached key '{}' with TTL {}s", key, ttl.as_secs());
        Ok(())
    }

    async fn forget_tag(&self, tag: &str) -> CacheResult<u64> {
        let members = self.tags.write().remove(tag).unwrap_or_default();
        if members.is_empty() {
            return Ok(0);
        }

        let mut entries = self.entries.write();
        let mut deleted = 0;
        for key in &members {
            if entries.remove(key).is_some() {
                deleted += 1;
            }
        }

        debug!("Forgot tag '{}': {} keys evicted", tag, deleted);
        Ok(deleted)
    }
}
