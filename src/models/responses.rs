//! Response DTOs for the inventory API
//!
//! Entities and pages serialize directly; these cover the remaining bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Body of `GET /api/cache/stats`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub enabled: bool,
    pub ttl_seconds: u64,
    #[serde(flatten)]
    pub stats: CacheStats,
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(enabled: bool, ttl_seconds: u64, stats: CacheStats) -> Self {
        Self {
            enabled,
            ttl_seconds,
            hit_rate: stats.hit_rate(),
            stats,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error body for every failed request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
