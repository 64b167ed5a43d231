//! API Module
//!
//! HTTP handlers and routing for the inventory REST API.
//!
//! # Endpoints
//! - `GET|POST /api/categories`, `GET /api/categories/paged`
//! - `GET|PUT|DELETE /api/categories/:id`
//! - `GET|POST /api/products`, `GET /api/products/paged`
//! - `GET|PUT|DELETE /api/products/:id`
//! - `GET /api/cache/stats` - Cache counters
//! - `DELETE /api/cache` - Drop every cached entry
//! - `GET /health` - Health check endpoint

pub mod categories;
pub mod handlers;
pub mod products;
pub mod routes;

pub use handlers::{clear_cache_handler, health_handler, stats_handler, AppState};
pub use routes::create_router;
