//! Inventory Cache - products and categories behind a read-through cache
//!
//! Entity services answer reads from a TTL/LRU cache, fall through to the
//! repository on a miss, and invalidate affected keys on every write.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod tasks;

pub use api::{create_router, AppState};
pub use cache::SharedCache;
pub use config::Config;
pub use error::ServiceError;
pub use services::{CategoryService, ProductService};
pub use tasks::spawn_cleanup_task;
