//! The two surface syntaxes a chain can be written in. Both produce the same
//! instruction list and stop at the first error.

pub mod addchain;
pub mod flow;
mod lexer;

pub use addchain::parse_addchain;
pub use flow::{parse_flow, CallKind};
pub use lexer::Token;

use crate::error::Result;
use crate::Instruction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Syntax {
    /// Calls and `for` loops in the control-flow language.
    #[default]
    Flow,
    /// Tab-separated `opcode\targs` lines.
    AddChain,
}

pub fn parse(source: &str, syntax: Syntax) -> Result<Vec<Instruction>> {
    let instructions = match syntax {
        Syntax::Flow => parse_flow(source)?,
        Syntax::AddChain => parse_addchain(source)?,
    };
    log::debug!("parsed {} instructions ({:?})", instructions.len(), syntax);
    Ok(instructions)
}
