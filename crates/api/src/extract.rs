//! Request extractors that reject with 422 instead of axum's defaults.
//!
//! Every rejection becomes [`AppError::Unprocessable`] (or a core
//! validation error for decoded bodies) so all input failures share the
//! same `{"detail": [...]}` shape before any handler code runs.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use itemreg_core::validation::{validate_item, FieldViolation, ViolationKind};
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::Segment;
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Body
// ---------------------------------------------------------------------------

/// JSON body decoded into `T` and checked with [`validate_item`].
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(body_rejection)?;
        let value: T = decode_body(&bytes)?;
        validate_item(&value)?;
        Ok(Self(value))
    }
}

/// Item body on a read endpoint.
///
/// When `require_read_body` is set the body is mandatory and validated like
/// [`ValidJson`], even though the handler never looks at it. Otherwise the
/// body is skipped and this always yields `None`.
#[derive(Debug)]
pub struct ReadBody<T>(pub Option<T>);

impl<T> FromRequest<AppState> for ReadBody<T>
where
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        if !state.config.require_read_body {
            return Ok(Self(None));
        }
        let ValidJson(value) = ValidJson::<T>::from_request(req, state).await?;
        Ok(Self(Some(value)))
    }
}

fn body_rejection(rejection: BytesRejection) -> AppError {
    AppError::Unprocessable(vec![FieldViolation::with_message(
        vec!["body".to_string()],
        ViolationKind::InvalidJson,
        rejection.body_text(),
    )])
}

/// Decode a JSON object body, mapping serde failures to located violations.
///
/// Only a JSON object is accepted as an item; derived `Deserialize` impls
/// would otherwise also fill a struct from an array by position.
pub fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::Unprocessable(vec![FieldViolation::new(
            vec!["body".to_string()],
            ViolationKind::Missing,
        )]));
    }

    let value: Value = serde_json::from_slice(bytes).map_err(|err| {
        AppError::Unprocessable(vec![FieldViolation::with_message(
            vec!["body".to_string()],
            ViolationKind::InvalidJson,
            err.to_string(),
        )])
    })?;

    if !value.is_object() {
        return Err(AppError::Unprocessable(vec![FieldViolation::with_message(
            vec!["body".to_string()],
            ViolationKind::InvalidType,
            "Input should be a valid object",
        )]));
    }

    serde_path_to_error::deserialize(value).map_err(|err| {
        let mut loc = vec!["body".to_string()];
        loc.extend(err.path().iter().filter_map(segment_name));
        let text = err.inner().to_string();
        let violation = match missing_field(&text) {
            Some(field) => {
                loc.push(field.to_string());
                FieldViolation::new(loc, ViolationKind::Missing)
            }
            None => FieldViolation::with_message(loc, ViolationKind::InvalidType, text),
        };
        AppError::Unprocessable(vec![violation])
    })
}

fn segment_name(segment: &Segment) -> Option<String> {
    match segment {
        Segment::Map { key } => Some(key.clone()),
        Segment::Seq { index } => Some(index.to_string()),
        Segment::Enum { variant } => Some(variant.clone()),
        Segment::Unknown => None,
    }
}

// ---------------------------------------------------------------------------
// Query and path
// ---------------------------------------------------------------------------

/// Query string decoded into `T`.
#[derive(Debug)]
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::Unprocessable(vec![located(
                "query",
                &rejection.body_text(),
                ViolationKind::InvalidType,
            )])),
        }
    }
}

/// Path parameters decoded into `T`.
#[derive(Debug)]
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::Unprocessable(vec![FieldViolation::with_message(
                vec!["path".to_string()],
                ViolationKind::InvalidType,
                rejection.body_text(),
            )])),
        }
    }
}

/// Build a violation from a serde message, naming the field when serde
/// reports it as missing.
fn located(source: &str, text: &str, fallback: ViolationKind) -> FieldViolation {
    match missing_field(text) {
        Some(field) => FieldViolation::new(
            vec![source.to_string(), field.to_string()],
            ViolationKind::Missing,
        ),
        None => FieldViolation::with_message(vec![source.to_string()], fallback, text),
    }
}

fn missing_field(text: &str) -> Option<&str> {
    const MARKER: &str = "missing field `";
    let start = text.find(MARKER)? + MARKER.len();
    let rest = &text[start..];
    rest.find('`').map(|end| &rest[..end])
}
