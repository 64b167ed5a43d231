//! TTL Cleanup Task
//!
//! Background sweep that drops expired cache entries so memory does not
//! wait on the next read of each key.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a background task that periodically removes expired entries.
///
/// Returns `None` when the interval is 0 or the cache is disabled; expired
/// entries are then only dropped lazily on read. The handle is aborted
/// during graceful shutdown.
pub fn spawn_cleanup_task(
    cache: SharedCache,
    cleanup_interval_secs: u64,
) -> Option<JoinHandle<()>> {
    if cleanup_interval_secs == 0 || !cache.is_enabled() {
        info!("TTL cleanup task disabled");
        return None;
    }

    let interval = Duration::from_secs(cleanup_interval_secs);
    Some(tokio::spawn(run_cleanup(cache, interval)))
}

async fn run_cleanup(cache: SharedCache, interval: Duration) {
    info!(
        "Starting TTL cleanup task with interval of {} seconds",
        interval.as_secs()
    );

    loop {
        tokio::time::sleep(interval).await;

        let removed = cache.cleanup_expired();
        if removed > 0 {
            info!("TTL cleanup: removed {} expired entries", removed);
        } else {
            debug!("TTL cleanup: no expired entries found");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheKey;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        // Expired on arrival, so only the sweep can remove it
        let cache = SharedCache::new(100, Duration::ZERO);
        cache.set(&CacheKey::ProductById(1), &"gizmo");

        let handle = spawn_cleanup_task(cache.clone(), 1).unwrap();
        tokio::time::sleep(Duration::from_millis(3000)).await;

        let stats = cache.stats();
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.expirations, 1);
        // Removed by the sweep, not by a read
        assert_eq!(stats.misses, 0);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache = SharedCache::new(100, Duration::from_secs(3600));
        cache.set(&CacheKey::ProductById(1), &"gizmo");

        let handle = spawn_cleanup_task(cache.clone(), 1).unwrap();
        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert_eq!(
            cache.get::<String>(&CacheKey::ProductById(1)).as_deref(),
            Some("gizmo")
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_zero_interval_or_disabled_cache_spawns_nothing() {
        let cache = SharedCache::new(100, Duration::from_secs(60));
        assert!(spawn_cleanup_task(cache, 0).is_none());
        assert!(spawn_cleanup_task(SharedCache::disabled(), 5).is_none());
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache = SharedCache::new(100, Duration::from_secs(60));

        let handle = spawn_cleanup_task(cache, 1).unwrap();
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
