//! Handlers for the `/items` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::item::{CreateItem, DeletedItem, Item, UpdateItem};
use campus_db::repositories::ItemRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::{PaginationParams, PriceRangeParams};
use crate::state::AppState;

/// Total row count payload for `GET /items/count`.
#[derive(Debug, Serialize)]
pub struct ItemCount {
    pub total_count: i64,
}

/// POST /api/v1/items
///
/// Duplicate names are rejected with a 409 before the insert is attempted;
/// a concurrent insert racing past the pre-check still trips
/// `uq_items_name` and maps to the same 409.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateItem>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let existing = ItemRepo::find_by_name(&state.pool, &input.name).await?;
    if !existing.is_empty() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Item with name '{}' already exists",
            input.name
        ))));
    }

    let item = ItemRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// POST /api/v1/items/batch
///
/// Inserts every payload entry in one transaction; any failure rolls the
/// whole batch back.
pub async fn create_batch(
    State(state): State<AppState>,
    Json(inputs): Json<Vec<CreateItem>>,
) -> AppResult<(StatusCode, Json<Vec<Item>>)> {
    if inputs.is_empty() {
        return Err(AppError::BadRequest("Batch must not be empty".into()));
    }

    let items = ItemRepo::create_many(&state.pool, &inputs).await?;
    Ok((StatusCode::CREATED, Json(items)))
}

/// GET /api/v1/items
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Item>>> {
    let items = ItemRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(items))
}

/// GET /api/v1/items/count
pub async fn count(State(state): State<AppState>) -> AppResult<Json<ItemCount>> {
    let total_count = ItemRepo::count(&state.pool).await?;
    Ok(Json(ItemCount { total_count }))
}

/// GET /api/v1/items/search/name/{name}
///
/// An empty result is a 404: an exact-name search that matches nothing
/// names a resource that does not exist.
pub async fn search_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<Item>>> {
    let items = ItemRepo::find_by_name(&state.pool, &name).await?;
    if items.is_empty() {
        return Err(AppError::NotFound(format!("No item named '{name}'")));
    }
    Ok(Json(items))
}

/// GET /api/v1/items/search/price?min_price=&max_price=
pub async fn search_by_price(
    State(state): State<AppState>,
    Query(params): Query<PriceRangeParams>,
) -> AppResult<Json<Vec<Item>>> {
    let min = params.min_price.unwrap_or(0.0);
    let items = ItemRepo::list_by_price_range(&state.pool, min, params.max_price).await?;
    Ok(Json(items))
}

/// GET /api/v1/items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Item>> {
    let item = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
    Ok(Json(item))
}

/// PUT /api/v1/items/{id}
///
/// Partial update: only fields present in the payload overwrite the row.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateItem>,
) -> AppResult<Json<Item>> {
    let item = ItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
    Ok(Json(item))
}

/// PUT /api/v1/items/{id}/full
///
/// Full replacement: every mutable column is overwritten from the payload.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateItem>,
) -> AppResult<Json<Item>> {
    let item = ItemRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
    Ok(Json(item))
}

/// DELETE /api/v1/items/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ItemRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Item", id }))
    }
}

/// DELETE /api/v1/items/{id}/receipt
///
/// Deletes the item and echoes its identifying fields back.
pub async fn delete_with_receipt(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedItem>> {
    let item = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;

    ItemRepo::delete(&state.pool, id).await?;

    Ok(Json(DeletedItem {
        id: item.id,
        name: item.name,
    }))
}
