//! # Error Taxonomy
//!
//! Three distinct failure families with different recovery stories: schema
//! lookups fail fast (programming error), validation is a structured rejection
//! the caller can act on, and projection either returns a complete payload or
//! an error — never a partial map.

use thiserror::Error;

use crate::models::RecordKind;

/// Programming errors against the field schema table.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
}

/// Recoverable rejections, always naming the offending field or value.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("required field `{0}` is empty")]
    MissingRequired(&'static str),

    #[error("field `{field}` exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("`{0}` is not a term in the highlight vocabulary")]
    InvalidHighlight(String),

    #[error("field `{field}` must reference a {expected} record")]
    InvalidReferenceKind {
        field: &'static str,
        expected: RecordKind,
    },

    #[error("referenced {kind} {id} does not exist")]
    UnknownReference { kind: RecordKind, id: i64 },
}

/// Failures while assembling the external payload. The instance itself is
/// never modified by projection.
#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("renderer failed: {0}")]
    Render(#[source] anyhow::Error),

    #[error("post carries no resolvable `{0}` reference")]
    ReferenceIntegrity(&'static str),
}

/// Service-boundary error: validation rejections plus collaborator failures.
#[derive(Error, Debug)]
pub enum PostError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("storage failure: {0}")]
    Storage(#[source] anyhow::Error),
}
