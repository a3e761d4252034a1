pub mod items;
pub mod root;
pub mod stock;

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

/// Anything the item handlers can store and serve.
pub trait Record: Clone + Serialize + DeserializeOwned + Validate + Send + Sync + 'static {}

impl<T> Record for T where T: Clone + Serialize + DeserializeOwned + Validate + Send + Sync + 'static {}
