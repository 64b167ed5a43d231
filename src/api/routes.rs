//! API Routes
//!
//! Configures the Axum router with every inventory endpoint.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::categories::{
    create_category, delete_category, get_category, list_categories, page_categories,
    update_category,
};
use super::handlers::{clear_cache_handler, health_handler, stats_handler, AppState};
use super::products::{
    create_product, delete_product, get_product, list_products, page_products, update_product,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/categories",
            get(list_categories).post(create_category),
        )
        .route("/api/categories/paged", get(page_categories))
        .route(
            "/api/categories/:id",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/paged", get(page_products))
        .route(
            "/api/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/api/cache", delete(clear_cache_handler))
        .route("/api/cache/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
