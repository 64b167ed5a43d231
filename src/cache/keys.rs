//! Cache Key Module
//!
//! The complete key space of the service layer. Every cached read and every
//! invalidation goes through [`CacheKey`], so the set of keys a write can
//! affect stays enumerable.

use std::fmt;

/// Prefix shared by every product key.
pub const PRODUCTS_PREFIX: &str = "products:";

/// Prefix shared by every product name-search key.
pub const PRODUCT_SEARCH_PREFIX: &str = "products:search:";

// == Cache Key ==
/// A canonical cache key, rendered as `{entity}:{operation}:{params}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    CategoriesAll,
    CategoryById(i64),
    CategoryByName(String),
    ProductsAll,
    ProductById(i64),
    ProductsByCategory(i64),
    /// Name-substring search; an absent term is the empty string.
    ProductSearch(String),
}

impl CacheKey {
    /// Search key for an optional term, using `""` when no term is given.
    pub fn product_search(term: Option<&str>) -> Self {
        CacheKey::ProductSearch(term.unwrap_or_default().to_string())
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::CategoriesAll => write!(f, "categories:all"),
            CacheKey::CategoryById(id) => write!(f, "categories:id:{}", id),
            CacheKey::CategoryByName(name) => write!(f, "categories:name:{}", name),
            CacheKey::ProductsAll => write!(f, "products:all"),
            CacheKey::ProductById(id) => write!(f, "products:id:{}", id),
            CacheKey::ProductsByCategory(id) => write!(f, "products:category:{}", id),
            CacheKey::ProductSearch(term) => write!(f, "{}{}", PRODUCT_SEARCH_PREFIX, term),
        }
    }
}
