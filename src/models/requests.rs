//! Request DTOs for the inventory API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::models::{CategoryInput, Price, ProductFilter, ProductInput};

/// Default page size when the query string omits `pageSize`.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Body for `POST /api/categories` and `PUT /api/categories/:id`.
///
/// `id` is optional on create; on update it must match the path when present.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

impl From<CategoryRequest> for CategoryInput {
    fn from(req: CategoryRequest) -> Self {
        CategoryInput { name: req.name }
    }
}

/// Body for `POST /api/products` and `PUT /api/products/:id`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Price,
    pub stock: i64,
    pub category_id: i64,
}

impl From<ProductRequest> for ProductInput {
    fn from(req: ProductRequest) -> Self {
        ProductInput {
            name: req.name,
            description: req.description,
            price: req.price,
            stock: req.stock,
            category_id: req.category_id,
        }
    }
}

/// Returns true when a body id is present and disagrees with the path id.
pub fn id_mismatch(body_id: Option<i64>, path_id: i64) -> bool {
    body_id.is_some_and(|id| id != path_id)
}

/// Query string for `GET /api/categories/paged`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPageQuery {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
    pub search: Option<String>,
}

/// Query string for `GET /api/products`.
///
/// `categoryId` selects the by-category listing, `search` the name search;
/// with neither, every product is listed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub category_id: Option<i64>,
    pub search: Option<String>,
}

/// Query string for `GET /api/products/paged`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPageQuery {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
    pub search: Option<String>,
    pub category_id: Option<i64>,
}

impl ProductPageQuery {
    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            search: self.search.clone(),
            category_id: self.category_id,
        }
    }
}
