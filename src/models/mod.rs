//! Domain entities and the DTOs of the inventory API
//!
//! Entities double as cached values and response bodies; requests carry the
//! caller-supplied fields and query strings.

pub mod domain;
pub mod page;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use domain::{Category, CategoryInput, Price, Product, ProductInput};
pub use page::{Page, PageRequest, ProductFilter};
pub use requests::{
    CategoryPageQuery, CategoryRequest, ProductListQuery, ProductPageQuery, ProductRequest,
};
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
