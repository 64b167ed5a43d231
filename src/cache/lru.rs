//! LRU Tracker Module
//!
//! Recency ordering used to pick an eviction victim when the store is full.

use std::collections::{BTreeMap, HashMap};

// == LRU Tracker ==
/// Tracks access recency with a monotonic tick per key.
///
/// `ticks` maps a key to its last access tick; `order` is the inverse index,
/// so the smallest tick is always the least recently used key.
#[derive(Debug, Default)]
pub struct LruTracker {
    clock: u64,
    ticks: HashMap<String, u64>,
    order: BTreeMap<u64, String>,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recently used.
    pub fn touch(&mut self, key: &str) {
        self.clock += 1;
        let tick = self.clock;

        match self.ticks.get_mut(key) {
            Some(previous) => {
                self.order.remove(&*previous);
                *previous = tick;
            }
            None => {
                self.ticks.insert(key.to_string(), tick);
            }
        }
        self.order.insert(tick, key.to_string());
    }

    // == Remove ==
    /// Stops tracking a key. Unknown keys are ignored.
    pub fn remove(&mut self, key: &str) {
        if let Some(tick) = self.ticks.remove(key) {
            self.order.remove(&tick);
        }
    }

    // == Evict Oldest ==
    /// Returns and forgets the least recently used key.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let (_, key) = self.order.pop_first()?;
        self.ticks.remove(&key);
        Some(key)
    }

    /// Forgets every key.
    pub fn clear(&mut self) {
        self.ticks.clear();
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[cfg(test)]
    fn peek_oldest(&self) -> Option<&str> {
        self.order.values().next().map(String::as_str)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_new() {
        let lru = LruTracker::new();
        assert_eq!(lru.len(), 0);
        assert_eq!(lru.peek_oldest(), None);
    }

    #[test]
    fn test_lru_touch_existing_key_moves_to_back() {
        let mut lru = LruTracker::new();

        lru.touch("products:all");
        lru.touch("products:id:1");
        lru.touch("categories:all");
        lru.touch("products:all");

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.peek_oldest(), Some("products:id:1"));
    }

    #[test]
    fn test_lru_evict_order() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");
        lru.touch("c");
        lru.touch("a");
        lru.touch("c");
        lru.touch("b");

        assert_eq!(lru.evict_oldest(), Some("a".to_string()));
        assert_eq!(lru.evict_oldest(), Some("c".to_string()));
        assert_eq!(lru.evict_oldest(), Some("b".to_string()));
        assert_eq!(lru.evict_oldest(), None);
        assert_eq!(lru.len(), 0);
    }

    #[test]
    fn test_lru_remove() {
        let mut lru = LruTracker::new();

        lru.touch("key1");
        lru.touch("key2");
        lru.remove("key1");
        lru.remove("missing");

        assert_eq!(lru.len(), 1);
        assert_eq!(lru.evict_oldest(), Some("key2".to_string()));
    }

    #[test]
    fn test_lru_clear() {
        let mut lru = LruTracker::new();
        lru.touch("key1");
        lru.touch("key2");

        lru.clear();

        assert_eq!(lru.len(), 0);
        assert_eq!(lru.evict_oldest(), None);
    }
}
