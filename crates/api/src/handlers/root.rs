use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

/// GET /
///
/// Fixed greeting.
pub async fn root() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}

/// Fallback for unmatched paths.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}
