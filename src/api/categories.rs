//! Category endpoints under `/api/categories`.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::error::{Result, ServiceError};
use crate::models::requests::{id_mismatch, DEFAULT_PAGE_SIZE};
use crate::models::{Category, CategoryPageQuery, CategoryRequest, Page};

use super::AppState;

/// Handler for GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    Ok(Json(state.categories.get_all().await?))
}

/// Handler for GET /api/categories/paged
pub async fn page_categories(
    State(state): State<AppState>,
    Query(query): Query<CategoryPageQuery>,
) -> Result<Json<Page<Category>>> {
    let page = state
        .categories
        .get_paged(
            query.page_number.unwrap_or(1),
            query.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            query.search.as_deref(),
        )
        .await?;
    Ok(Json(page))
}

/// Handler for GET /api/categories/:id
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Category>> {
    state
        .categories
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(ServiceError::NotFound {
            entity: "Category",
            id,
        })
}

/// Handler for POST /api/categories
///
/// Responds 201 with a `Location` header pointing at the new category.
pub async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CategoryRequest>,
) -> Result<impl IntoResponse> {
    let created = state.categories.create(req.into()).await?;
    let location = format!("/api/categories/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Handler for PUT /api/categories/:id
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<Category>> {
    if id_mismatch(req.id, id) {
        return Err(ServiceError::validation("Id mismatch"));
    }
    Ok(Json(state.categories.update(id, req.into()).await?))
}

/// Handler for DELETE /api/categories/:id
///
/// Products in the category are deleted with it.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.categories.delete(id).await?;
    Ok(StatusCode::OK)
}
