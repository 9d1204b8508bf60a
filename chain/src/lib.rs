//! Symbolic evaluation of addition chains.
//!
//! A chain program is parsed into [`Instruction`]s from either of two
//! syntaxes and then run over an [`Environment`] in which every variable
//! holds a [`Monomial`] over the program's inputs. The result states exactly
//! which power of the inputs each variable ends up holding.

mod error;
mod eval;
mod instruction;
mod monomial;
pub mod parse;


pub use error::{ParseError, Result};
pub use eval::{evaluate, Environment};
pub use instruction::Instruction;
pub use monomial::Monomial;
pub use parse::{parse, Syntax};
