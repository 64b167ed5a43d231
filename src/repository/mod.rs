//! Repository Module
//!
//! Storage capabilities consumed by the services, one trait per entity
//! family, plus the in-memory implementation and the sample-data seeder.

mod error;
mod memory;
mod seed;

use async_trait::async_trait;

use crate::models::{
    Category, CategoryInput, Page, PageRequest, Product, ProductFilter, ProductInput,
};

pub use error::{RepositoryError, Result};
pub use memory::InMemoryRepository;
pub use seed::seed;

/// Storage operations for categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Gets a category by its ID.
    async fn get_by_id(&self, id: i64) -> Result<Option<Category>>;

    /// Gets every category ordered by ID.
    async fn get_all(&self) -> Result<Vec<Category>>;

    /// Gets the category with exactly this name. Blank names match nothing.
    async fn get_by_name(&self, name: &str) -> Result<Option<Category>>;

    /// Gets one page of categories whose name contains `search`.
    async fn get_paged(&self, page: PageRequest, search: Option<&str>) -> Result<Page<Category>>;

    /// Inserts a category and returns it with its assigned ID.
    async fn add(&self, category: &CategoryInput) -> Result<Category>;

    /// Replaces the name of an existing category.
    async fn update(&self, category: &Category) -> Result<Category>;

    /// Deletes a category together with its products.
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Storage operations for products.
///
/// Every read fills in `category_name` from the current category row.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Gets a product by its ID.
    async fn get_by_id(&self, id: i64) -> Result<Option<Product>>;

    /// Gets every product ordered by ID.
    async fn get_all(&self) -> Result<Vec<Product>>;

    /// Gets the products of one category.
    async fn get_by_category(&self, category_id: i64) -> Result<Vec<Product>>;

    /// Gets products whose name contains `term`; a blank term returns all.
    async fn search_by_name(&self, term: &str) -> Result<Vec<Product>>;

    /// Gets one page of products matching `filter`.
    async fn get_paged(&self, page: PageRequest, filter: &ProductFilter) -> Result<Page<Product>>;

    /// Inserts a product and returns it with its assigned ID.
    async fn add(&self, product: &ProductInput) -> Result<Product>;

    /// Replaces every field of an existing product.
    async fn update(&self, id: i64, product: &ProductInput) -> Result<Product>;

    /// Deletes a product by its ID.
    async fn delete(&self, id: i64) -> Result<()>;
}
