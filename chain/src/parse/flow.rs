//! Front-end for chains traced as calls in a small control-flow language:
//!
//! ```text
//! fieldSq(t0, x)
//! fieldMul(t1, t0, x)
//! for i = 1, 5, 1 do fieldSq(t1, t1) end
//! ```

use std::vec::IntoIter;

use super::lexer::{lex, Token};
use crate::error::{ParseError, Result};
use crate::Instruction;

/// Instruction kind selected by the suffix of a function name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    RepeatedSquare,
    Square,
    Multiply,
    Divide,
    Zero,
}

impl CallKind {
    /// Longer suffixes are tried first, so `fieldRepeatedSq` is not a `Sq`.
    pub fn classify(name: &str) -> Option<CallKind> {
        if ends_with_any(name, &["RepeatedSq", "RepeatedDouble"]) {
            Some(CallKind::RepeatedSquare)
        } else if ends_with_any(name, &["Sq", "Double"]) {
            Some(CallKind::Square)
        } else if ends_with_any(name, &["Mul", "Add"]) {
            Some(CallKind::Multiply)
        } else if ends_with_any(name, &["Div", "Sub"]) {
            Some(CallKind::Divide)
        } else if name.ends_with("Zero") {
            Some(CallKind::Zero)
        } else {
            None
        }
    }
}

fn ends_with_any(name: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| name.ends_with(suffix))
}

struct Parser {
    tokens: IntoIter<Token>,
}

impl Parser {
    fn next_token(&mut self) -> Result<Token> {
        self.tokens.next().ok_or(ParseError::UnexpectedEof)
    }

    fn expect(&mut self, expected: Token) -> Result<()> {
        match self.next_token()? {
            token if token == expected => Ok(()),
            token => Err(ParseError::UnexpectedToken(token.to_string())),
        }
    }

    fn ident(&mut self) -> Result<String> {
        match self.next_token()? {
            Token::Ident(name) => Ok(name),
            token => Err(ParseError::UnexpectedToken(token.to_string())),
        }
    }

    fn keyword(&mut self, keyword: &str) -> Result<()> {
        self.expect(Token::Ident(keyword.to_string()))
    }

    fn int(&mut self) -> Result<u64> {
        match self.next_token()? {
            Token::Int(n) => Ok(n),
            token => Err(ParseError::UnexpectedToken(token.to_string())),
        }
    }

    fn statement(&mut self, token: Token) -> Result<Instruction> {
        match token {
            Token::Ident(name) if name == "for" => self.repeat_loop(),
            Token::Ident(name) => self.call(name),
            token => Err(ParseError::UnexpectedToken(token.to_string())),
        }
    }

    /// `for i = 1, N, 1 do xSq(dst, src) end`
    fn repeat_loop(&mut self) -> Result<Instruction> {
        self.ident()?;
        self.expect(Token::Equals)?;
        self.expect(Token::Int(1))?;
        self.expect(Token::Comma)?;
        let count = self.int()?;
        self.expect(Token::Comma)?;
        self.expect(Token::Int(1))?;
        self.keyword("do")?;

        let name = self.ident()?;
        let body = match CallKind::classify(&name) {
            Some(CallKind::Square) => self.call(name)?,
            Some(_) => return Err(ParseError::UnexpectedToken(Token::Ident(name).to_string())),
            None => return Err(ParseError::UnknownFunction(name)),
        };

        self.keyword("end")?;

        match body {
            Instruction::Square { dst, src } => Ok(Instruction::RepeatedSquare { dst, src, count }),
            other => Ok(other),
        }
    }

    /// `name(args...)` with the argument list implied by the name's suffix.
    fn call(&mut self, name: String) -> Result<Instruction> {
        let kind = CallKind::classify(&name).ok_or(ParseError::UnknownFunction(name))?;

        self.expect(Token::LParen)?;
        let instruction = match kind {
            CallKind::RepeatedSquare => {
                let dst = self.ident()?;
                self.expect(Token::Comma)?;
                let src = self.ident()?;
                self.expect(Token::Comma)?;
                let count = self.int()?;
                Instruction::RepeatedSquare { dst, src, count }
            }
            CallKind::Square => {
                let dst = self.ident()?;
                self.expect(Token::Comma)?;
                let src = self.ident()?;
                Instruction::Square { dst, src }
            }
            CallKind::Multiply | CallKind::Divide => {
                let dst = self.ident()?;
                self.expect(Token::Comma)?;
                let lhs = self.ident()?;
                self.expect(Token::Comma)?;
                let rhs = self.ident()?;
                if kind == CallKind::Multiply {
                    Instruction::Multiply { dst, lhs, rhs }
                } else {
                    Instruction::Divide { dst, lhs, rhs }
                }
            }
            CallKind::Zero => Instruction::Zero { dst: self.ident()? },
        };
        self.expect(Token::RParen)?;

        Ok(instruction)
    }
}

/// Parse a control-flow program into instructions.
pub fn parse_flow(source: &str) -> Result<Vec<Instruction>> {
    let mut parser = Parser {
        tokens: lex(source)?.into_iter(),
    };
    let mut instructions = Vec::new();

    while let Some(token) = parser.tokens.next() {
        instructions.push(parser.statement(token)?);
    }

    Ok(instructions)
}
