//! Lexer for lispy source lines.
//!
//! Converts a line of input into tokens using the logos lexer generator.
//! Whitespace between tokens is skipped. A `-` immediately followed by
//! digits is a negative number literal; on its own it is the subtraction
//! operator.

use logos::Logos;

use crate::error::{ParseError, Result};

/// Tokens of the lispy grammar.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// One of `+ - * /`
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    Operator,

    /// Signed base-10 integer literal. Range is checked at evaluation time.
    #[regex("-?[0-9]+")]
    Number,
}

/// A token together with the slice of input it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'src> {
    /// Token kind
    pub token: Token,
    /// Matched text
    pub text: &'src str,
    /// 1-based column of the first character
    pub column: usize,
}

impl Lexeme<'_> {
    /// Human-readable description for error messages.
    pub fn describe(&self) -> String {
        match self.token {
            Token::LParen | Token::RParen => format!("`{}`", self.text),
            Token::Operator => format!("operator `{}`", self.text),
            Token::Number => format!("number `{}`", self.text),
        }
    }
}

/// Tokenize a line of input.
pub fn tokenize(source: &str) -> Result<Vec<Lexeme<'_>>> {
    let mut lexemes = Vec::new();
    for (result, span) in Token::lexer(source).spanned() {
        let column = column_at(source, span.start);
        match result {
            Ok(token) => lexemes.push(Lexeme {
                token,
                text: &source[span],
                column,
            }),
            Err(()) => return Err(ParseError::UnexpectedCharacter { column }),
        }
    }
    Ok(lexemes)
}

/// 1-based character column of a byte offset.
fn column_at(source: &str, offset: usize) -> usize {
    source[..offset].chars().count() + 1
}
