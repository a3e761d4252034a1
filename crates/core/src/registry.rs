//! The in-memory item registry.
//!
//! An ordered, append-only sequence of records addressed by position. Every
//! operation takes the lock once, so each call is atomic on its own; nothing
//! spans requests.

use tokio::sync::RwLock;
use validator::Validate;

use crate::error::CoreError;
use crate::id::ItemId;
use crate::validation::validate_item;

/// Entity name used in not-found errors.
pub const ENTITY: &str = "Item";

struct Slot<T> {
    id: ItemId,
    item: T,
}

/// Process-lifetime store of records of one schema.
///
/// Designed to be wrapped in `Arc` and shared through application state.
pub struct ItemRegistry<T> {
    slots: RwLock<Vec<Slot<T>>>,
}

impl<T> Default for ItemRegistry<T> {
    fn default() -> Self {
        Self {
            slots: RwLock::new(Vec::new()),
        }
    }
}

impl<T> ItemRegistry<T>
where
    T: Clone + Validate,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append `item`, returning the full contents afterwards.
    ///
    /// Nothing is appended when validation fails.
    pub async fn create(&self, item: T) -> Result<Vec<T>, CoreError> {
        validate_item(&item)?;

        let mut slots = self.slots.write().await;
        let id = ItemId::new(slots.len() as u64);
        slots.push(Slot { id, item });
        Ok(slots.iter().map(|slot| slot.item.clone()).collect())
    }

    /// The first `limit` records in insertion order. `limit <= 0` yields none.
    pub async fn list(&self, limit: i64) -> Vec<T> {
        let take = if limit <= 0 {
            0
        } else {
            usize::try_from(limit).unwrap_or(usize::MAX)
        };
        self.slots
            .read()
            .await
            .iter()
            .take(take)
            .map(|slot| slot.item.clone())
            .collect()
    }

    /// The record at `raw_id`.
    pub async fn get(&self, raw_id: i64) -> Result<T, CoreError> {
        let slots = self.slots.read().await;
        let idx = locate(&slots, raw_id)?;
        Ok(slots[idx].item.clone())
    }

    /// Validate `item` and replace the record at `raw_id` with it wholesale.
    pub async fn update(&self, raw_id: i64, item: T) -> Result<T, CoreError> {
        validate_item(&item)?;

        let mut slots = self.slots.write().await;
        let idx = locate(&slots, raw_id)?;
        slots[idx].item = item.clone();
        Ok(item)
    }

    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }
}

/// Resolve a raw path id to a slot index.
fn locate<T>(slots: &[Slot<T>], raw_id: i64) -> Result<usize, CoreError> {
    let not_found = || CoreError::NotFound {
        entity: ENTITY,
        id: raw_id,
    };
    let id = ItemId::from_raw(raw_id).ok_or_else(not_found)?;
    slots
        .binary_search_by_key(&id, |slot| slot.id)
        .map_err(|_| not_found())
}
