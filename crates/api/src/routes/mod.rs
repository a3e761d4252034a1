pub mod health;
pub mod items;

use axum::routing::get;
use axum::Router;
use itemreg_core::item::ItemSchema;

use crate::handlers;
use crate::state::AppState;

/// Build the public route tree for the configured record shape.
///
/// ```text
/// GET    /                    -> root
/// POST   /items               -> create_item
/// GET    /items?limit=N       -> list_items
/// GET    /items/{item_id}     -> get_item
/// PUT    /items/{item_id}     -> update_item
/// ```
pub fn api_routes(schema: ItemSchema) -> Router<AppState> {
    let items = match schema {
        ItemSchema::Simple => items::simple_router(),
        ItemSchema::Validated => items::stock_router(),
    };

    Router::new()
        .route("/", get(handlers::root::root))
        .merge(items)
}
