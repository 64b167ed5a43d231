//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{
    Category, CategoryInput, Page, PageRequest, Product, ProductFilter, ProductInput,
};

use super::{CategoryRepository, ProductRepository, RepositoryError, Result};

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    products: BTreeMap<i64, ProductInput>,
    next_category_id: i64,
    next_product_id: i64,
}

impl Tables {
    /// Joins a stored product row with its category name.
    fn project(&self, id: i64, row: &ProductInput) -> Product {
        Product {
            id,
            name: row.name.clone(),
            description: row.description.clone(),
            price: row.price,
            stock: row.stock,
            category_id: row.category_id,
            category_name: self
                .categories
                .get(&row.category_id)
                .map(|category| category.name.clone()),
        }
    }

    fn products_where(&self, predicate: impl Fn(&ProductInput) -> bool) -> Vec<Product> {
        self.products
            .iter()
            .filter(|(_, row)| predicate(row))
            .map(|(id, row)| self.project(*id, row))
            .collect()
    }

    fn require_category(&self, category_id: i64) -> Result<()> {
        if self.categories.contains_key(&category_id) {
            Ok(())
        } else {
            Err(RepositoryError::Constraint(format!(
                "category {} does not exist",
                category_id
            )))
        }
    }
}

/// Process-local storage backend.
///
/// Tables live behind one `Arc<RwLock<_>>` so a category delete and its
/// product cascade are applied atomically. IDs start at 1 and are never
/// reused. Data is lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[async_trait]
impl CategoryRepository for InMemoryRepository {
    async fn get_by_id(&self, id: i64) -> Result<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.values().cloned().collect())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Category>> {
        if name.trim().is_empty() {
            return Ok(None);
        }
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .values()
            .find(|category| category.name == name)
            .cloned())
    }

    async fn get_paged(&self, page: PageRequest, search: Option<&str>) -> Result<Page<Category>> {
        let needle = search
            .filter(|term| !term.trim().is_empty())
            .map(str::to_lowercase);

        let tables = self.tables.read().await;
        let matches = tables
            .categories
            .values()
            .filter(|category| match &needle {
                Some(needle) => contains_ignore_case(&category.name, needle),
                None => true,
            })
            .cloned()
            .collect();
        Ok(Page::slice(matches, page))
    }

    async fn add(&self, category: &CategoryInput) -> Result<Category> {
        let mut tables = self.tables.write().await;
        tables.next_category_id += 1;
        let created = Category {
            id: tables.next_category_id,
            name: category.name.clone(),
        };
        tables.categories.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, category: &Category) -> Result<Category> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .categories
            .get_mut(&category.id)
            .ok_or(RepositoryError::NotFound {
                entity_type: "Category",
                id: category.id,
            })?;
        stored.name = category.name.clone();
        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.categories.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "Category",
                id,
            });
        }
        tables.products.retain(|_, row| row.category_id != id);
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn get_by_id(&self, id: i64) -> Result<Option<Product>> {
        let tables = self.tables.read().await;
        Ok(tables.products.get(&id).map(|row| tables.project(id, row)))
    }

    async fn get_all(&self) -> Result<Vec<Product>> {
        let tables = self.tables.read().await;
        Ok(tables.products_where(|_| true))
    }

    async fn get_by_category(&self, category_id: i64) -> Result<Vec<Product>> {
        let tables = self.tables.read().await;
        Ok(tables.products_where(|row| row.category_id == category_id))
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Product>> {
        let needle = term.trim().to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables.products_where(|row| contains_ignore_case(&row.name, &needle)))
    }

    async fn get_paged(&self, page: PageRequest, filter: &ProductFilter) -> Result<Page<Product>> {
        let filter = filter.clone().normalized();
        let needle = filter.search.as_deref().map(str::to_lowercase);

        let tables = self.tables.read().await;
        let matches = tables.products_where(|row| {
            let category_matches = filter
                .category_id
                .map_or(true, |category_id| row.category_id == category_id);
            let search_matches = needle.as_deref().map_or(true, |needle| {
                contains_ignore_case(&row.name, needle)
                    || contains_ignore_case(row.description.as_deref().unwrap_or_default(), needle)
            });
            category_matches && search_matches
        });
        Ok(Page::slice(matches, page))
    }

    async fn add(&self, product: &ProductInput) -> Result<Product> {
        let mut tables = self.tables.write().await;
        tables.require_category(product.category_id)?;
        tables.next_product_id += 1;
        let id = tables.next_product_id;
        tables.products.insert(id, product.clone());
        Ok(tables.project(id, product))
    }

    async fn update(&self, id: i64, product: &ProductInput) -> Result<Product> {
        let mut tables = self.tables.write().await;
        tables.require_category(product.category_id)?;
        let stored = tables
            .products
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound {
                entity_type: "Product",
                id,
            })?;
        *stored = product.clone();
        Ok(tables.project(id, product))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound {
                entity_type: "Product",
                id,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Price;

    fn product(name: &str, category_id: i64) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            description: Some(format!("{} for everyday use", name)),
            price: Price::from_cents(1999),
            stock: 5,
            category_id,
        }
    }

    #[tokio::test]
    async fn test_ids_are_assigned_from_one() {
        let repo = InMemoryRepository::new();

        let first = CategoryRepository::add(&repo, &CategoryInput::new("Gadgets"))
            .await
            .unwrap();
        let second = CategoryRepository::add(&repo, &CategoryInput::new("Garden"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_product_reads_join_category_name() {
        let repo = InMemoryRepository::new();
        let category = CategoryRepository::add(&repo, &CategoryInput::new("Gadgets"))
            .await
            .unwrap();

        let created = ProductRepository::add(&repo, &product("Gizmo", category.id))
            .await
            .unwrap();
        assert_eq!(created.category_name.as_deref(), Some("Gadgets"));

        CategoryRepository::update(
            &repo,
            &Category {
                id: category.id,
                name: "Devices".to_string(),
            },
        )
        .await
        .unwrap();

        let read = ProductRepository::get_by_id(&repo, created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(read.category_name.as_deref(), Some("Devices"));
    }

    #[tokio::test]
    async fn test_add_product_requires_category() {
        let repo = InMemoryRepository::new();

        let result = ProductRepository::add(&repo, &product("Gizmo", 999)).await;

        assert!(matches!(result, Err(RepositoryError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_category_delete_cascades() {
        let repo = InMemoryRepository::new();
        let gadgets = CategoryRepository::add(&repo, &CategoryInput::new("Gadgets"))
            .await
            .unwrap();
        let garden = CategoryRepository::add(&repo, &CategoryInput::new("Garden"))
            .await
            .unwrap();
        ProductRepository::add(&repo, &product("Gizmo", gadgets.id))
            .await
            .unwrap();
        ProductRepository::add(&repo, &product("Rake", garden.id))
            .await
            .unwrap();

        CategoryRepository::delete(&repo, gadgets.id).await.unwrap();

        let remaining = ProductRepository::get_all(&repo).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Rake");
    }

    #[tokio::test]
    async fn test_missing_rows_report_not_found() {
        let repo = InMemoryRepository::new();

        assert_eq!(
            ProductRepository::delete(&repo, 7).await,
            Err(RepositoryError::NotFound {
                entity_type: "Product",
                id: 7
            })
        );
        assert!(matches!(
            CategoryRepository::delete(&repo, 7).await,
            Err(RepositoryError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_by_name_is_exact() {
        let repo = InMemoryRepository::new();
        CategoryRepository::add(&repo, &CategoryInput::new("Toys"))
            .await
            .unwrap();

        assert!(repo.get_by_name("Toys").await.unwrap().is_some());
        assert!(repo.get_by_name("toys").await.unwrap().is_none());
        assert!(repo.get_by_name("  ").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_by_name_is_case_insensitive_and_blank_returns_all() {
        let repo = InMemoryRepository::new();
        let category = CategoryRepository::add(&repo, &CategoryInput::new("Gadgets"))
            .await
            .unwrap();
        for name in ["Smart Lamp", "Desk Lamp", "Router"] {
            ProductRepository::add(&repo, &product(name, category.id))
                .await
                .unwrap();
        }

        assert_eq!(repo.search_by_name("lamp").await.unwrap().len(), 2);
        assert_eq!(repo.search_by_name("").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_product_paging_with_filters() {
        let repo = InMemoryRepository::new();
        let gadgets = CategoryRepository::add(&repo, &CategoryInput::new("Gadgets"))
            .await
            .unwrap();
        let garden = CategoryRepository::add(&repo, &CategoryInput::new("Garden"))
            .await
            .unwrap();
        for n in 1..=25 {
            let category_id = if n % 5 == 0 { garden.id } else { gadgets.id };
            ProductRepository::add(&repo, &product(&format!("Item {}", n), category_id))
                .await
                .unwrap();
        }

        let page = ProductRepository::get_paged(
            &repo,
            PageRequest::new(2, 10),
            &ProductFilter::default(),
        )
        .await
        .unwrap();
        assert_eq!(page.total_count, 25);
        assert_eq!(page.items.first().map(|p| p.id), Some(11));

        let garden_only = ProductRepository::get_paged(
            &repo,
            PageRequest::new(1, 10),
            &ProductFilter {
                search: None,
                category_id: Some(garden.id),
            },
        )
        .await
        .unwrap();
        assert_eq!(garden_only.total_count, 5);

        let by_description = ProductRepository::get_paged(
            &repo,
            PageRequest::new(1, 10),
            &ProductFilter {
                search: Some("ITEM 2 FOR".to_string()),
                category_id: Some(0),
            },
        )
        .await
        .unwrap();
        assert_eq!(by_description.total_count, 1);
    }

    #[tokio::test]
    async fn test_category_paging_with_search() {
        let repo = InMemoryRepository::new();
        for name in ["Garden", "Games", "Tools"] {
            CategoryRepository::add(&repo, &CategoryInput::new(name))
                .await
                .unwrap();
        }

        let page = CategoryRepository::get_paged(&repo, PageRequest::new(1, 10), Some("ga"))
            .await
            .unwrap();

        assert_eq!(page.total_count, 2);
        assert_eq!(page.items[0].name, "Garden");
    }
}
