//! Product service
//!
//! Read-through caching over [`ProductRepository`]. Writes check that the
//! referenced category exists and then invalidate every product key whose
//! value the write could have changed: the full list, the product itself,
//! the old and new category buckets, and all name searches.
//!
//! As with categories, a read racing a write can store the pre-write value
//! after the invalidation ran. It is served until the entry's TTL expires,
//! which bounds how stale a product read or a category existence check
//! can be.

use std::sync::Arc;

use tracing::info;

use crate::cache::{CacheKey, SharedCache, PRODUCT_SEARCH_PREFIX};
use crate::error::{Result, ServiceError};
use crate::models::{Page, PageRequest, Product, ProductFilter, ProductInput};
use crate::repository::ProductRepository;

use super::validation::{validate_id, validate_product};
use super::CategoryService;

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    categories: CategoryService,
    cache: SharedCache,
}

impl ProductService {
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        categories: CategoryService,
        cache: SharedCache,
    ) -> Self {
        Self {
            repository,
            categories,
            cache,
        }
    }

    // == Reads ==

    pub async fn get_all(&self) -> Result<Vec<Product>> {
        let key = CacheKey::ProductsAll;
        if let Some(products) = self.cache.get(&key) {
            return Ok(products);
        }

        let products = self.repository.get_all().await?;
        self.cache.set(&key, &products);
        Ok(products)
    }

    /// Looks up one product. Absence is returned but never cached.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Product>> {
        let key = CacheKey::ProductById(id);
        if let Some(product) = self.cache.get(&key) {
            return Ok(Some(product));
        }

        let product = self.repository.get_by_id(id).await?;
        if let Some(found) = &product {
            self.cache.set(&key, found);
        }
        Ok(product)
    }

    pub async fn get_by_category(&self, category_id: i64) -> Result<Vec<Product>> {
        let key = CacheKey::ProductsByCategory(category_id);
        if let Some(products) = self.cache.get(&key) {
            return Ok(products);
        }

        let products = self.repository.get_by_category(category_id).await?;
        self.cache.set(&key, &products);
        Ok(products)
    }

    /// Name-substring search; a blank term matches every product.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<Product>> {
        let key = CacheKey::product_search(Some(term));
        if let Some(products) = self.cache.get(&key) {
            return Ok(products);
        }

        let products = self.repository.search_by_name(term).await?;
        self.cache.set(&key, &products);
        Ok(products)
    }

    /// Pages are always read from the repository.
    pub async fn get_paged(
        &self,
        page_number: i64,
        page_size: i64,
        filter: ProductFilter,
    ) -> Result<Page<Product>> {
        let page = PageRequest::new(page_number, page_size);
        Ok(self
            .repository
            .get_paged(page, &filter.normalized())
            .await?)
    }

    // == Writes ==

    pub async fn create(&self, input: ProductInput) -> Result<Product> {
        validate_product(&input)?;
        self.require_category(input.category_id).await?;

        let created = self.repository.add(&input).await?;

        self.invalidate(&[
            CacheKey::ProductsAll,
            CacheKey::ProductsByCategory(created.category_id),
        ]);

        info!(product_id = created.id, category_id = created.category_id, "Product created");
        Ok(created)
    }

    pub async fn update(&self, id: i64, input: ProductInput) -> Result<Product> {
        validate_id("product", id)?;
        validate_product(&input)?;

        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound {
                entity: "Product",
                id,
            })?;
        self.require_category(input.category_id).await?;

        let updated = self.repository.update(id, &input).await?;

        self.invalidate(&[
            CacheKey::ProductsAll,
            CacheKey::ProductById(id),
            CacheKey::ProductsByCategory(existing.category_id),
            CacheKey::ProductsByCategory(updated.category_id),
        ]);

        info!(product_id = id, category_id = updated.category_id, "Product updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound {
                entity: "Product",
                id,
            })?;

        self.repository.delete(id).await?;

        self.invalidate(&[
            CacheKey::ProductsAll,
            CacheKey::ProductById(id),
            CacheKey::ProductsByCategory(existing.category_id),
        ]);

        info!(product_id = id, "Product deleted");
        Ok(())
    }

    async fn require_category(&self, category_id: i64) -> Result<()> {
        match self.categories.get_by_id(category_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::DependencyMissing(category_id)),
        }
    }

    fn invalidate(&self, keys: &[CacheKey]) {
        self.cache.invalidate(keys);
        // Any product write can change any search result.
        self.cache.invalidate_prefix(PRODUCT_SEARCH_PREFIX);
    }
}
