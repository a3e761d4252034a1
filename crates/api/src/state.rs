use std::sync::Arc;

use axum::extract::FromRef;
use itemreg_core::item::{Item, ItemSchema, StockItem};
use itemreg_core::registry::ItemRegistry;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; every field is behind an `Arc`. Both registries are
/// constructed empty at startup, but only the one matching
/// [`ServerConfig::schema`] is reachable through the router.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Simple-schema records.
    pub items: Arc<ItemRegistry<Item>>,
    /// Validated-schema records.
    pub stock: Arc<ItemRegistry<StockItem>>,
}

impl AppState {
    /// Fresh state with empty registries.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            items: Arc::new(ItemRegistry::new()),
            stock: Arc::new(ItemRegistry::new()),
        }
    }

    /// Number of records held by the active registry.
    pub async fn item_count(&self) -> usize {
        match self.config.schema {
            ItemSchema::Simple => self.items.len().await,
            ItemSchema::Validated => self.stock.len().await,
        }
    }
}

impl FromRef<AppState> for Arc<ItemRegistry<Item>> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.items)
    }
}

impl FromRef<AppState> for Arc<ItemRegistry<StockItem>> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.stock)
    }
}
