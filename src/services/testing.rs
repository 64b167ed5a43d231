//! Test doubles shared by the service tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::cache::SharedCache;
use crate::models::{
    Category, CategoryInput, Page, PageRequest, Product, ProductFilter, ProductInput,
};
use crate::repository::{
    CategoryRepository, InMemoryRepository, ProductRepository, RepositoryError, Result,
};

use super::{CategoryService, ProductService};

pub const TTL: Duration = Duration::from_secs(60);

/// In-memory repository that counts reads and can refuse writes.
#[derive(Debug, Default)]
pub struct InstrumentedRepository {
    inner: InMemoryRepository,
    reads: AtomicUsize,
    fail_writes: AtomicBool,
}

impl InstrumentedRepository {
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn read(&self) {
        self.reads.fetch_add(1, Ordering::SeqCst);
    }

    fn write(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable("writes disabled".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InstrumentedRepository {
    async fn get_by_id(&self, id: i64) -> Result<Option<Category>> {
        self.read();
        CategoryRepository::get_by_id(&self.inner, id).await
    }

    async fn get_all(&self) -> Result<Vec<Category>> {
        self.read();
        CategoryRepository::get_all(&self.inner).await
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Category>> {
        self.read();
        self.inner.get_by_name(name).await
    }

    async fn get_paged(&self, page: PageRequest, search: Option<&str>) -> Result<Page<Category>> {
        self.read();
        CategoryRepository::get_paged(&self.inner, page, search).await
    }

    async fn add(&self, category: &CategoryInput) -> Result<Category> {
        self.write()?;
        CategoryRepository::add(&self.inner, category).await
    }

    async fn update(&self, category: &Category) -> Result<Category> {
        self.write()?;
        CategoryRepository::update(&self.inner, category).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.write()?;
        CategoryRepository::delete(&self.inner, id).await
    }
}

#[async_trait]
impl ProductRepository for InstrumentedRepository {
    async fn get_by_id(&self, id: i64) -> Result<Option<Product>> {
        self.read();
        ProductRepository::get_by_id(&self.inner, id).await
    }

    async fn get_all(&self) -> Result<Vec<Product>> {
        self.read();
        ProductRepository::get_all(&self.inner).await
    }

    async fn get_by_category(&self, category_id: i64) -> Result<Vec<Product>> {
        self.read();
        self.inner.get_by_category(category_id).await
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Product>> {
        self.read();
        self.inner.search_by_name(term).await
    }

    async fn get_paged(&self, page: PageRequest, filter: &ProductFilter) -> Result<Page<Product>> {
        self.read();
        ProductRepository::get_paged(&self.inner, page, filter).await
    }

    async fn add(&self, product: &ProductInput) -> Result<Product> {
        self.write()?;
        ProductRepository::add(&self.inner, product).await
    }

    async fn update(&self, id: i64, product: &ProductInput) -> Result<Product> {
        self.write()?;
        ProductRepository::update(&self.inner, id, product).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.write()?;
        ProductRepository::delete(&self.inner, id).await
    }
}

/// Both services wired to one instrumented repository and one cache.
pub struct Harness {
    pub repo: Arc<InstrumentedRepository>,
    pub cache: SharedCache,
    pub categories: CategoryService,
    pub products: ProductService,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_ttl(TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self::with_cache(SharedCache::new(1_000, ttl))
    }

    pub fn with_cache(cache: SharedCache) -> Self {
        let repo = Arc::new(InstrumentedRepository::default());
        let categories = CategoryService::new(repo.clone(), cache.clone());
        let products = ProductService::new(repo.clone(), categories.clone(), cache.clone());
        Self {
            repo,
            cache,
            categories,
            products,
        }
    }
}
