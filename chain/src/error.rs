//! Errors raised while reading a chain program.

use thiserror::Error;

/// The first structural problem found in the input. Parsing stops there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer could not scan the input starting here.
    #[error("unmatched input: {0:?}")]
    Unmatched(String),

    #[error("unexpected token: {0}")]
    UnexpectedToken(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Unknown opcode in the line-oriented form.
    #[error("unknown instruction {0:?}")]
    UnknownInstruction(String),

    /// Call to a function whose name has no recognised suffix.
    #[error("unknown function {0:?}")]
    UnknownFunction(String),

    #[error("{opcode}: expected {expected} operands, found {found}")]
    Arity {
        opcode: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid repeat count {0:?}")]
    InvalidCount(String),
}

pub type Result<T> = core::result::Result<T, ParseError>;
