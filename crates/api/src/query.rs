//! Query parameter types for the item handlers.

use serde::Deserialize;

/// Default page size for `GET /items`.
pub const DEFAULT_LIMIT: i64 = 10;

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// `?limit=` for listing. Non-positive values list nothing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// `?updated_by=` on validated-schema updates. Required.
#[derive(Debug, Deserialize)]
pub struct UpdatedByParams {
    pub updated_by: i64,
}
