//! Product endpoints under `/api/products`.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::error::{Result, ServiceError};
use crate::models::requests::{id_mismatch, DEFAULT_PAGE_SIZE};
use crate::models::{Page, Product, ProductListQuery, ProductPageQuery, ProductRequest};

use super::AppState;

/// Handler for GET /api/products
///
/// `?categoryId=` lists one category, otherwise `?search=` filters by name.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<Product>>> {
    let products = match (query.category_id, query.search.as_deref()) {
        (Some(category_id), _) => state.products.get_by_category(category_id).await?,
        (None, Some(term)) => state.products.search_by_name(term).await?,
        (None, None) => state.products.get_all().await?,
    };
    Ok(Json(products))
}

/// Handler for GET /api/products/paged
pub async fn page_products(
    State(state): State<AppState>,
    Query(query): Query<ProductPageQuery>,
) -> Result<Json<Page<Product>>> {
    let page = state
        .products
        .get_paged(
            query.page_number.unwrap_or(1),
            query.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            query.filter(),
        )
        .await?;
    Ok(Json(page))
}

/// Handler for GET /api/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>> {
    state
        .products
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(ServiceError::NotFound {
            entity: "Product",
            id,
        })
}

/// Handler for POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> Result<impl IntoResponse> {
    let created = state.products.create(req.into()).await?;
    let location = format!("/api/products/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Handler for PUT /api/products/:id
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<Product>> {
    if id_mismatch(req.id, id) {
        return Err(ServiceError::validation("Id mismatch"));
    }
    Ok(Json(state.products.update(id, req.into()).await?))
}

/// Handler for DELETE /api/products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.products.delete(id).await?;
    Ok(StatusCode::OK)
}
