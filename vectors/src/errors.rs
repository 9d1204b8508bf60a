//! Errors raised while generating, decoding or checking test vectors.

use refcurve::FieldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A case whose stated result does not match the recomputed one.
    #[error("{category} case {id} ({name:?}) does not hold")]
    Mismatch {
        category: &'static str,
        id: u64,
        name: String,
    },

    #[error("missing required field: {0}")]
    MissingField(String),

    /// A decoded point that does not satisfy the curve equation.
    #[error("point not on curve: {0}")]
    Curve(String),
}

pub type Result<T> = std::result::Result<T, VectorError>;
