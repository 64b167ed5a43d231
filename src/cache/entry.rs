//! Cache Entry Module
//!
//! A single cached projection with its absolute expiry.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A serialized value together with the time it stops being served.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Serialized JSON value
    pub value: String,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry that expires `ttl` from now.
    pub fn new(value: String, ttl: Duration) -> Self {
        let now = current_timestamp_ms();
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);

        Self {
            value,
            expires_at: now.saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// An entry is expired once the current time reaches `expires_at`.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    /// Expiry check against an explicit clock reading.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
