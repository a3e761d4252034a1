//! Handlers shared by both record shapes, plus the simple-schema update.
//!
//! Records are addressed by position (`/items/{item_id}` is the zero-based
//! index at request time). Handlers are generic over the stored record; the
//! registry is pulled out of [`AppState`](crate::state::AppState) by type.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use itemreg_core::item::Item;
use itemreg_core::registry::ItemRegistry;

use crate::error::AppResult;
use crate::extract::{ReadBody, ValidJson, ValidPath, ValidQuery};
use crate::handlers::Record;
use crate::query::ListParams;

/// POST /items
///
/// Append an item. Responds with the whole registry, not just the new record.
pub async fn create_item<T: Record>(
    State(registry): State<Arc<ItemRegistry<T>>>,
    ValidJson(item): ValidJson<T>,
) -> AppResult<Json<Vec<T>>> {
    let items = registry.create(item).await?;

    tracing::info!(count = items.len(), "Item created");

    Ok(Json(items))
}

/// GET /items?limit=N
///
/// The first `limit` items (default 10) in insertion order.
pub async fn list_items<T: Record>(
    State(registry): State<Arc<ItemRegistry<T>>>,
    ValidQuery(params): ValidQuery<ListParams>,
) -> Json<Vec<T>> {
    Json(registry.list(params.limit).await)
}

/// GET /items/{item_id}
///
/// The item at position `item_id`. The request body is not used for the
/// lookup; see [`ReadBody`] for when it is still required.
pub async fn get_item<T: Record>(
    State(registry): State<Arc<ItemRegistry<T>>>,
    ValidPath(item_id): ValidPath<i64>,
    ReadBody(_ignored): ReadBody<T>,
) -> AppResult<Json<T>> {
    let item = registry.get(item_id).await?;

    Ok(Json(item))
}

/// PUT /items/{item_id}
///
/// Replace the item at `item_id` wholesale and echo it back.
pub async fn update_item(
    State(registry): State<Arc<ItemRegistry<Item>>>,
    ValidPath(item_id): ValidPath<i64>,
    ValidJson(item): ValidJson<Item>,
) -> AppResult<Json<Item>> {
    let item = registry.update(item_id, item).await?;

    tracing::info!(item_id, "Item updated");

    Ok(Json(item))
}
