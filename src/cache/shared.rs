//! Shared Cache Handle
//!
//! The process-wide handle injected into every service. It owns the lock
//! around [`CacheStore`] and the JSON encoding of cached values.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use crate::cache::{CacheKey, CacheStats, CacheStore};
use crate::config::Config;

// == Shared Cache ==
/// Cloneable handle to one process-wide [`CacheStore`].
///
/// The mutex is only held for the duration of a single synchronous store
/// call and never across an `.await`.
#[derive(Debug, Clone)]
pub struct SharedCache {
    store: Arc<Mutex<CacheStore>>,
    ttl: Duration,
    enabled: bool,
}

impl SharedCache {
    /// Creates an enabled cache with the given capacity and entry TTL.
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            store: Arc::new(Mutex::new(CacheStore::new(max_entries))),
            ttl,
            enabled: true,
        }
    }

    /// A cache that never stores and never hits.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new(1, Duration::ZERO)
        }
    }

    pub fn from_config(config: &Config) -> Self {
        if config.cache_enabled {
            Self::new(config.cache_max_entries, config.cache_ttl())
        } else {
            Self::disabled()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Get ==
    /// Looks up and decodes a cached value.
    ///
    /// A value that no longer decodes as `T` is dropped and counts as a miss.
    pub fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        if !self.enabled {
            return None;
        }

        let key = key.to_string();
        let raw = self.lock().get(&key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => {
                tracing::trace!(%key, "Cache hit");
                Some(value)
            }
            Err(err) => {
                tracing::warn!(%key, error = %err, "Cached value failed to decode");
                self.lock().remove(&key);
                None
            }
        }
    }

    // == Set ==
    /// Encodes and stores a value with the default TTL.
    pub fn set<T: Serialize>(&self, key: &CacheKey, value: &T) {
        if !self.enabled {
            return;
        }

        let key = key.to_string();
        match serde_json::to_string(value) {
            Ok(raw) => self.lock().set(key, raw, self.ttl),
            Err(err) => tracing::warn!(%key, error = %err, "Failed to encode value for cache"),
        }
    }

    // == Invalidate ==
    /// Removes each key. Missing keys are ignored.
    pub fn invalidate(&self, keys: &[CacheKey]) {
        if !self.enabled {
            return;
        }

        let mut store = self.lock();
        for key in keys {
            if store.remove(&key.to_string()) {
                tracing::debug!(%key, "Invalidated cache entry");
            }
        }
    }

    /// Removes every key starting with `prefix`.
    pub fn invalidate_prefix(&self, prefix: &str) {
        if !self.enabled {
            return;
        }

        let removed = self.lock().remove_prefix(prefix);
        if removed > 0 {
            tracing::debug!(prefix, removed, "Invalidated cache entries by prefix");
        }
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Removes expired entries, returning how many were dropped.
    pub fn cleanup_expired(&self) -> usize {
        self.lock().cleanup_expired()
    }

    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    fn lock(&self) -> MutexGuard<'_, CacheStore> {
        // A panic mid-operation cannot leave a torn entry behind, so the
        // store is still usable after poisoning.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
