//! Cache Module
//!
//! Process-local read-through cache used by the entity services: a TTL store
//! with LRU-bounded capacity, the canonical key space, and the shared handle
//! the services hold.

mod entry;
mod keys;
mod lru;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use keys::{CacheKey, PRODUCTS_PREFIX, PRODUCT_SEARCH_PREFIX};
pub use lru::LruTracker;
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::CacheStore;
