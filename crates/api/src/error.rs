use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use itemreg_core::error::CoreError;
use itemreg_core::validation::FieldViolation;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{"detail": ...}` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `itemreg_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request could not be turned into handler input. Each violation
    /// already carries its `body`/`query`/`path` location.
    #[error("Unprocessable request: {} violation(s)", .0.len())]
    Unprocessable(Vec<FieldViolation>),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                (StatusCode::NOT_FOUND, json!(format!("{entity} {id} not found")))
            }
            // Core validation runs on the decoded body.
            AppError::Core(CoreError::Validation(violations)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!(violations
                    .into_iter()
                    .map(|v| v.under("body"))
                    .collect::<Vec<_>>()),
            ),
            AppError::Unprocessable(violations) => {
                (StatusCode::UNPROCESSABLE_ENTITY, json!(violations))
            }
        };

        tracing::debug!(status = status.as_u16(), "Request rejected");

        (status, axum::Json(json!({ "detail": detail }))).into_response()
    }
}
