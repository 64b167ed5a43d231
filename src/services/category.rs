//! Category service
//!
//! Read-through caching over [`CategoryRepository`] with name-uniqueness
//! checks and targeted invalidation on every write.
//!
//! Reads and writes are not serialized against each other. A read that
//! misses, loads a row, and stores it after a concurrent write has already
//! invalidated that key leaves the old row cached until its TTL expires.
//! That TTL is the staleness bound; the uniqueness probe is subject to it
//! as well.

use std::sync::Arc;

use tracing::info;

use crate::cache::{CacheKey, SharedCache, PRODUCTS_PREFIX};
use crate::error::{Result, ServiceError};
use crate::models::{Category, CategoryInput, Page, PageRequest};
use crate::repository::CategoryRepository;

use super::validation::{validate_category, validate_id};

/// Cache-aware category operations.
///
/// Cheap to clone; every clone shares the repository and the process-wide
/// cache.
#[derive(Clone)]
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
    cache: SharedCache,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>, cache: SharedCache) -> Self {
        Self { repository, cache }
    }

    // == Reads ==

    pub async fn get_all(&self) -> Result<Vec<Category>> {
        let key = CacheKey::CategoriesAll;
        if let Some(categories) = self.cache.get(&key) {
            return Ok(categories);
        }

        let categories = self.repository.get_all().await?;
        self.cache.set(&key, &categories);
        Ok(categories)
    }

    /// Looks up one category. Absence is returned but never cached.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Category>> {
        let key = CacheKey::CategoryById(id);
        if let Some(category) = self.cache.get(&key) {
            return Ok(Some(category));
        }

        let category = self.repository.get_by_id(id).await?;
        if let Some(found) = &category {
            self.cache.set(&key, found);
        }
        Ok(category)
    }

    /// Looks up a category by exact name. Absence is never cached.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Category>> {
        let key = CacheKey::CategoryByName(name.to_string());
        if let Some(category) = self.cache.get(&key) {
            return Ok(Some(category));
        }

        let category = self.repository.get_by_name(name).await?;
        if let Some(found) = &category {
            self.cache.set(&key, found);
        }
        Ok(category)
    }

    /// Pages are always read from the repository.
    pub async fn get_paged(
        &self,
        page_number: i64,
        page_size: i64,
        search: Option<&str>,
    ) -> Result<Page<Category>> {
        let page = PageRequest::new(page_number, page_size);
        Ok(self.repository.get_paged(page, search).await?)
    }

    // == Writes ==

    pub async fn create(&self, input: CategoryInput) -> Result<Category> {
        validate_category(&input)?;

        if self.get_by_name(&input.name).await?.is_some() {
            return Err(ServiceError::Conflict(input.name));
        }

        let created = self.repository.add(&input).await?;

        self.cache.invalidate(&[
            CacheKey::CategoriesAll,
            CacheKey::CategoryByName(created.name.clone()),
        ]);

        info!(category_id = created.id, name = %created.name, "Category created");
        Ok(created)
    }

    pub async fn update(&self, id: i64, input: CategoryInput) -> Result<Category> {
        validate_id("category", id)?;
        validate_category(&input)?;

        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound {
                entity: "Category",
                id,
            })?;

        if let Some(holder) = self.get_by_name(&input.name).await? {
            if holder.id != id {
                return Err(ServiceError::Conflict(input.name));
            }
        }

        let updated = self
            .repository
            .update(&Category {
                id,
                name: input.name,
            })
            .await?;

        self.cache.invalidate(&[
            CacheKey::CategoriesAll,
            CacheKey::CategoryById(id),
            CacheKey::CategoryByName(existing.name.clone()),
            CacheKey::CategoryByName(updated.name.clone()),
        ]);
        if existing.name != updated.name {
            // Cached products carry the category name.
            self.cache.invalidate_prefix(PRODUCTS_PREFIX);
        }

        info!(category_id = id, name = %updated.name, "Category updated");
        Ok(updated)
    }

    /// Deletes a category and, through the repository, its products.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound {
                entity: "Category",
                id,
            })?;

        self.repository.delete(id).await?;

        self.cache.invalidate(&[
            CacheKey::CategoriesAll,
            CacheKey::CategoryById(id),
            CacheKey::CategoryByName(existing.name),
        ]);
        self.cache.invalidate_prefix(PRODUCTS_PREFIX);

        info!(category_id = id, "Category deleted");
        Ok(())
    }
}
