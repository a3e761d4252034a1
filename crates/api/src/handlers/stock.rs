use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use itemreg_core::item::{StockItem, StockUpdate};
use itemreg_core::registry::ItemRegistry;

use crate::error::AppResult;
use crate::extract::{ValidJson, ValidPath, ValidQuery};
use crate::query::UpdatedByParams;

/// PUT /items/{item_id}?updated_by=N
///
/// Replace the stock item at `item_id` and report who changed it.
pub async fn update_item(
    State(registry): State<Arc<ItemRegistry<StockItem>>>,
    ValidPath(item_id): ValidPath<i64>,
    ValidQuery(params): ValidQuery<UpdatedByParams>,
    ValidJson(item): ValidJson<StockItem>,
) -> AppResult<Json<StockUpdate>> {
    let item = registry.update(item_id, item).await?;

    tracing::info!(item_id, updated_by = params.updated_by, "Stock item updated");

    Ok(Json(StockUpdate {
        item_id,
        item,
        updated_by: params.updated_by,
    }))
}
