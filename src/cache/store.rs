//! Cache Store Module
//!
//! Key to (value, expiry) map with lazy expiry, LRU-bounded capacity and
//! prefix invalidation.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, LruTracker};

// == Cache Store ==
/// In-memory store of serialized projections.
///
/// All operations are synchronous; callers share it through
/// [`SharedCache`](crate::cache::SharedCache), which owns the lock.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store holding at most `max_entries` entries.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
        }
    }

    // == Set ==
    /// Stores or overwrites `key`, expiring `ttl` from now.
    ///
    /// Inserting a new key into a full store evicts the least recently used
    /// entry first.
    pub fn set(&mut self, key: String, value: String, ttl: Duration) {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            if let Some(evicted_key) = self.lru.evict_oldest() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
            }
        }

        self.lru.touch(&key);
        self.entries.insert(key, CacheEntry::new(value, ttl));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the value if present and unexpired.
    ///
    /// An expired entry is dropped on the spot and reported as a miss.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.discard(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        self.lru.touch(key);
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Remove ==
    /// Removes `key` if present. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.discard(key);
        if removed {
            self.stats.record_invalidations(1);
        }
        removed
    }

    // == Remove Prefix ==
    /// Removes every key starting with `prefix`. Returns the count removed.
    pub fn remove_prefix(&mut self, prefix: &str) -> usize {
        let doomed: Vec<String> = self
            .entries
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect();

        for key in &doomed {
            self.discard(key);
        }

        self.stats.record_invalidations(doomed.len());
        doomed.len()
    }

    // == Clear ==
    /// Drops every entry. Counters other than the entry count are kept.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        self.stats.record_invalidations(count);
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns a snapshot of the counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries. Returns the number removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.discard(key);
        }

        self.stats.record_expirations(expired_keys.len());
        expired_keys.len()
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn discard(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.lru.remove(key);
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }
}
