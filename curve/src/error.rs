//! Error types for field and curve arithmetic.

use thiserror::Error;

/// Errors reported by field construction, coercion and square roots.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// An operand could not be coerced into a field element.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The element has no square root in the field.
    #[error("{0} is not a quadratic residue")]
    SqrtNonResidue(String),

    /// A hexadecimal string could not be decoded.
    #[error("invalid hex string: {0:?}")]
    InvalidHex(String),

    /// The modulus is not an odd number greater than 2.
    #[error("field modulus must be an odd prime, got {0}")]
    EvenModulus(String),
}

pub type Result<T> = core::result::Result<T, FieldError>;
