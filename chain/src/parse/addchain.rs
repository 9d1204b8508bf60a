//! Front-end for the tab-separated form emitted by addition-chain search
//! tools: one `opcode\targ\targ...` per line.

use crate::error::{ParseError, Result};
use crate::Instruction;

fn operands<'a, const N: usize>(opcode: &str, args: &[&'a str]) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| ParseError::Arity {
        opcode: opcode.to_string(),
        expected: N,
        found: args.len(),
    })
}

fn count(field: &str) -> Result<u64> {
    field
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidCount(field.to_string()))
}

/// Parse the line-oriented form. `tmp` lines are declarations and are
/// ignored; `break` ends the program.
pub fn parse_addchain(source: &str) -> Result<Vec<Instruction>> {
    let mut instructions = Vec::new();

    for line in source.lines() {
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let opcode = fields.next().unwrap_or_default();
        let args: Vec<&str> = fields.collect();

        let instruction = match opcode {
            "tmp" => continue,
            "break" => break,
            "double" => {
                let [dst, src] = operands(opcode, &args)?;
                Instruction::Square {
                    dst: dst.to_string(),
                    src: src.to_string(),
                }
            }
            "add" => {
                let [dst, lhs, rhs] = operands(opcode, &args)?;
                Instruction::Multiply {
                    dst: dst.to_string(),
                    lhs: lhs.to_string(),
                    rhs: rhs.to_string(),
                }
            }
            "sub" => {
                let [dst, lhs, rhs] = operands(opcode, &args)?;
                Instruction::Divide {
                    dst: dst.to_string(),
                    lhs: lhs.to_string(),
                    rhs: rhs.to_string(),
                }
            }
            "zero" => {
                let [dst] = operands(opcode, &args)?;
                Instruction::Zero {
                    dst: dst.to_string(),
                }
            }
            "shift" => {
                let [dst, src, n] = operands(opcode, &args)?;
                Instruction::RepeatedSquare {
                    dst: dst.to_string(),
                    src: src.to_string(),
                    count: count(n)?,
                }
            }
            other => return Err(ParseError::UnknownInstruction(other.to_string())),
        };

        instructions.push(instruction);
    }

    Ok(instructions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(x: &str) -> String {
        x.to_string()
    }

    #[test]
    fn test_opcodes() {
        let program = "tmp\tt0\tt1\ndouble\tt0\tx\nadd\tt1\tt0\tx\nsub\tt2\tt1\tx\nzero\tt3\nshift\tt4\tt1\t7\n";
        assert_eq!(
            parse_addchain(program).unwrap(),
            vec![
                Instruction::Square { dst: s("t0"), src: s("x") },
                Instruction::Multiply { dst: s("t1"), lhs: s("t0"), rhs: s("x") },
                Instruction::Divide { dst: s("t2"), lhs: s("t1"), rhs: s("x") },
                Instruction::Zero { dst: s("t3") },
                Instruction::RepeatedSquare { dst: s("t4"), src: s("t1"), count: 7 },
            ]
        );
    }

    #[test]
    fn test_break_stops_processing() {
        let program = "double\tz\tx\nbreak\nbogus\tline\n";
        assert_eq!(
            parse_addchain(program).unwrap(),
            vec![Instruction::Square { dst: s("z"), src: s("x") }]
        );
    }

    #[test]
    fn test_unknown_instruction() {
        assert_eq!(
            parse_addchain("double\tz\tx\nmul\tz\tx\tx\n"),
            Err(ParseError::UnknownInstruction(s("mul")))
        );
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(
            parse_addchain("add\tz\tx\n"),
            Err(ParseError::Arity {
                opcode: s("add"),
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_invalid_count() {
        assert_eq!(
            parse_addchain("shift\tz\tx\tfive\n"),
            Err(ParseError::InvalidCount(s("five")))
        );
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        assert_eq!(
            parse_addchain("zero\tz\r\n\r\n").unwrap(),
            vec![Instruction::Zero { dst: s("z") }]
        );
    }
}
