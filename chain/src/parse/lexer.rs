use core::fmt;

use logos::{Lexer, Logos, Skip};

use crate::error::{ParseError, Result};

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum Token {
    /// `--` starts a comment; the callback consumes it entirely.
    #[token("--", skip_comment)]
    Comment,

    #[regex("[0-9]+", |lex| lex.slice().parse::<u64>().ok())]
    Int(u64),

    #[regex("[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    #[token("=")]
    Equals,
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Comment => write!(f, "comment"),
            Token::Int(n) => write!(f, "int {n}"),
            Token::Ident(name) => write!(f, "ident {name:?}"),
            Token::Equals => write!(f, "punct \"=\""),
            Token::Comma => write!(f, "punct \",\""),
            Token::LParen => write!(f, "punct \"(\""),
            Token::RParen => write!(f, "punct \")\""),
        }
    }
}

/// Long comments `--[==[ ... ]==]` close on the first bracket with the same
/// number of `=`; anything else after `--` runs to the end of the line.
fn skip_comment(lex: &mut Lexer<Token>) -> Skip {
    let rest = lex.remainder();
    let len = long_comment_len(rest)
        .unwrap_or_else(|| rest.find('\n').map_or(rest.len(), |i| i + 1));
    lex.bump(len);
    Skip
}

fn long_comment_len(rest: &str) -> Option<usize> {
    let after_open = rest.strip_prefix('[')?;
    let level = after_open.chars().take_while(|&c| c == '=').count();
    let body = after_open[level..].strip_prefix('[')?;
    let close = format!("]{}]", "=".repeat(level));
    let end = body.find(&close)?;
    Some(level + 2 + end + close.len())
}

/// Scan the whole input up front, failing on the first unscannable character.
pub fn lex(source: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => {
                let rest = &source[lexer.span().start..];
                let line = rest.lines().next().unwrap_or(rest);
                return Err(ParseError::Unmatched(line.to_string()));
            }
        }
    }

    Ok(tokens)
}
