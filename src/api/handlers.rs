//! API Handlers
//!
//! Shared application state plus the service-level endpoints that do not
//! belong to an entity family.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::cache::SharedCache;
use crate::config::Config;
use crate::models::{HealthResponse, StatsResponse};
use crate::repository::{CategoryRepository, InMemoryRepository, ProductRepository};
use crate::services::{CategoryService, ProductService};

/// Application state shared across all handlers.
///
/// Both services hold the same [`SharedCache`], so invalidations issued by
/// one are seen by the other.
#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryService,
    pub products: ProductService,
    pub cache: SharedCache,
}

impl AppState {
    /// Wires both services to one repository and one cache.
    pub fn new<R>(repository: Arc<R>, cache: SharedCache) -> Self
    where
        R: CategoryRepository + ProductRepository + 'static,
    {
        let categories = CategoryService::new(repository.clone(), cache.clone());
        let products = ProductService::new(repository, categories.clone(), cache.clone());
        Self {
            categories,
            products,
            cache,
        }
    }

    /// Creates state over an empty in-memory repository using the cache
    /// settings from the Config.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(InMemoryRepository::new()),
            SharedCache::from_config(config),
        )
    }
}

/// Handler for GET /api/cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(
        state.cache.is_enabled(),
        state.cache.ttl().as_secs(),
        state.cache.stats(),
    ))
}

/// Handler for DELETE /api/cache
///
/// Drops every cached projection. Counters are kept.
pub async fn clear_cache_handler(State(state): State<AppState>) -> StatusCode {
    state.cache.clear();
    tracing::info!("Cache cleared");
    StatusCode::OK
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
