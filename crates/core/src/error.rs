use crate::validation::FieldViolation;

/// Domain-level errors shared by the registry and the HTTP layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    /// No record resolves from the given id.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// The payload failed one or more field constraints.
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldViolation>),
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.loc.join("."), v.message))
        .collect::<Vec<_>>()
        .join("; ")
}
