//! Field validation for inbound item payloads.
//!
//! Constraints are declared on the item structs with `validator` derives;
//! [`validate_item`] runs them and flattens the nested error tree into an
//! ordered list of [`FieldViolation`]s so callers get one tagged result
//! instead of walking `validator`'s maps.

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::error::CoreError;

/// The reason a single field was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationKind {
    /// String longer than `max` characters.
    TooLong { max: u64 },
    /// Number not strictly greater than `limit`.
    NotGreaterThan { limit: f64 },
    /// Required field absent from the payload.
    Missing,
    /// Field present but of the wrong JSON type.
    InvalidType,
    /// Body is not parseable JSON at all.
    InvalidJson,
    /// Any other `validator` code, kept verbatim.
    Other(String),
}

impl ViolationKind {
    /// Machine-readable error type string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::TooLong { .. } => "string_too_long",
            Self::NotGreaterThan { .. } => "greater_than",
            Self::Missing => "missing",
            Self::InvalidType => "type_error",
            Self::InvalidJson => "json_invalid",
            Self::Other(code) => code,
        }
    }

    fn default_message(&self) -> String {
        match self {
            Self::TooLong { max } => format!("String should have at most {max} characters"),
            Self::NotGreaterThan { limit } => format!("Input should be greater than {limit}"),
            Self::Missing => "Field required".to_string(),
            Self::InvalidType => "Input has the wrong type".to_string(),
            Self::InvalidJson => "Invalid JSON".to_string(),
            Self::Other(code) => format!("Failed '{code}' check"),
        }
    }
}

/// One rejected field: where it is, why, and a readable message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    /// Path to the offending field, outermost first (e.g. `["supplier", "id"]`).
    pub loc: Vec<String>,
    #[serde(rename = "type", serialize_with = "serialize_kind")]
    pub kind: ViolationKind,
    #[serde(rename = "msg")]
    pub message: String,
}

fn serialize_kind<S: serde::Serializer>(kind: &ViolationKind, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(kind.as_str())
}

impl FieldViolation {
    /// Build a violation with the kind's default message.
    pub fn new(loc: Vec<String>, kind: ViolationKind) -> Self {
        let message = kind.default_message();
        Self { loc, kind, message }
    }

    /// Build a violation with an explicit message.
    pub fn with_message(loc: Vec<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            loc,
            kind,
            message: message.into(),
        }
    }

    /// Prepend a location segment (e.g. `body`, `query`).
    pub fn under(mut self, segment: &str) -> Self {
        self.loc.insert(0, segment.to_string());
        self
    }

    fn from_validator(loc: Vec<String>, err: &ValidationError) -> Self {
        let kind = match err.code.as_ref() {
            "length" => match err.params.get("max").and_then(|v| v.as_u64()) {
                Some(max) => ViolationKind::TooLong { max },
                None => ViolationKind::Other("length".to_string()),
            },
            "range" => match err.params.get("exclusive_min").and_then(|v| v.as_f64()) {
                Some(limit) => ViolationKind::NotGreaterThan { limit },
                None => ViolationKind::Other("range".to_string()),
            },
            other => ViolationKind::Other(other.to_string()),
        };
        match &err.message {
            Some(msg) => Self::with_message(loc, kind, msg.to_string()),
            None => Self::new(loc, kind),
        }
    }
}

/// Run the declared constraints on `item`.
///
/// Returns [`CoreError::Validation`] with every violation, sorted by location.
pub fn validate_item<T: Validate>(item: &T) -> Result<(), CoreError> {
    match item.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(CoreError::Validation(flatten(&errors))),
    }
}

/// Flatten a `validator` error tree into a sorted violation list.
pub fn flatten(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut out = Vec::new();
    collect(&[], errors, &mut out);
    out.sort_by(|a, b| a.loc.cmp(&b.loc));
    out
}

fn collect(prefix: &[String], errors: &ValidationErrors, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let mut loc = prefix.to_vec();
        loc.push(field.to_string());
        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|e| FieldViolation::from_validator(loc.clone(), e)));
            }
            ValidationErrorsKind::Struct(inner) => collect(&loc, inner, out),
            ValidationErrorsKind::List(entries) => {
                for (idx, inner) in entries {
                    let mut indexed = loc.clone();
                    indexed.push(idx.to_string());
                    collect(&indexed, inner, out);
                }
            }
        }
    }
}
