use core::fmt::{self, Display, Formatter};

/// One step of an addition chain, independent of the syntax it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// dst = lhs * rhs
    Multiply { dst: String, lhs: String, rhs: String },
    /// dst = lhs / rhs
    Divide { dst: String, lhs: String, rhs: String },
    /// dst = src^2
    Square { dst: String, src: String },
    /// dst = src^(2^count)
    RepeatedSquare { dst: String, src: String, count: u64 },
    /// dst = 1
    Zero { dst: String },
}

impl Instruction {
    /// The variable this instruction assigns.
    pub fn dst(&self) -> &str {
        match self {
            Instruction::Multiply { dst, .. }
            | Instruction::Divide { dst, .. }
            | Instruction::Square { dst, .. }
            | Instruction::RepeatedSquare { dst, .. }
            | Instruction::Zero { dst } => dst,
        }
    }
}

/// Renders in the tab-separated addchain form.
impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Multiply { dst, lhs, rhs } => write!(f, "add\t{dst}\t{lhs}\t{rhs}"),
            Instruction::Divide { dst, lhs, rhs } => write!(f, "sub\t{dst}\t{lhs}\t{rhs}"),
            Instruction::Square { dst, src } => write!(f, "double\t{dst}\t{src}"),
            Instruction::RepeatedSquare { dst, src, count } => {
                write!(f, "shift\t{dst}\t{src}\t{count}")
            }
            Instruction::Zero { dst } => write!(f, "zero\t{dst}"),
        }
    }
}
