//! Item routes, one router per record shape.

use axum::routing::get;
use axum::Router;
use itemreg_core::item::{Item, StockItem};

use crate::handlers::{items, stock};
use crate::state::AppState;

/// Simple-schema routes.
///
/// ```text
/// POST   /items                    -> create_item
/// GET    /items                    -> list_items
/// GET    /items/{item_id}          -> get_item
/// PUT    /items/{item_id}          -> update_item
/// ```
pub fn simple_router() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(items::list_items::<Item>).post(items::create_item::<Item>),
        )
        .route(
            "/items/{item_id}",
            get(items::get_item::<Item>).put(items::update_item),
        )
}

/// Validated-schema routes.
///
/// ```text
/// POST   /items                    -> create_item
/// GET    /items                    -> list_items
/// GET    /items/{item_id}          -> get_item
/// PUT    /items/{item_id}?updated_by=N -> update_item
/// ```
pub fn stock_router() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(items::list_items::<StockItem>).post(items::create_item::<StockItem>),
        )
        .route(
            "/items/{item_id}",
            get(items::get_item::<StockItem>).put(stock::update_item),
        )
}
