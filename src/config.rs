//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds applied to every cached projection
    pub cache_ttl_secs: u64,
    /// Maximum number of cached projections before LRU eviction
    pub cache_max_entries: usize,
    /// Expired-entry sweep interval in seconds, 0 disables the sweep
    pub cleanup_interval: u64,
    /// When false the services run against a cache that never hits
    pub cache_enabled: bool,
    /// Populate sample categories and products on startup
    pub seed_data: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL` - Entry TTL in seconds (default: 60)
    /// - `CACHE_MAX_ENTRIES` - Cache capacity (default: 10000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 30)
    /// - `CACHE_ENABLED` - `true`/`false` (default: true)
    /// - `SEED_DATA` - `true`/`false` (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cache_ttl_secs: env_or("CACHE_TTL", defaults.cache_ttl_secs),
            cache_max_entries: env_or("CACHE_MAX_ENTRIES", defaults.cache_max_entries),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            cache_enabled: env_or("CACHE_ENABLED", defaults.cache_enabled),
            seed_data: env_or("SEED_DATA", defaults.seed_data),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_ttl_secs: 60,
            cache_max_entries: 10_000,
            cleanup_interval: 30,
            cache_enabled: true,
            seed_data: true,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
