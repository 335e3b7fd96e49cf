//! Recursive-descent parser producing [`SyntaxNode`] trees.
//!
//! Grammar:
//!
//! ```text
//! number   : /-?[0-9]+/ ;
//! operator : '+' | '-' | '*' | '/' ;
//! expr     : <number> | '(' <operator> <expr>+ ')' ;
//! lispy    : /^/ <operator> <expr>+ /$/
//!          | /^/ '(' <operator> <expr>+ ')' /$/ ;
//! ```
//!
//! A bare line (`+ 1 2`) yields a `>` root anchored by two `regex` nodes;
//! a parenthesized line (`(+ 1 2)`) yields the `expr|>` node itself. Both
//! keep the operator at child 1 and the first operand at child 2.

use super::lexer::{tokenize, Lexeme, Token};
use super::{tag, SyntaxNode};
use crate::error::{ParseError, Result};

/// Default limit on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parse a line with the default nesting limit.
pub fn parse(source: &str) -> Result<SyntaxNode> {
    Parser::new().parse(source)
}

/// Parser configuration.
///
/// The nesting limit bounds the depth of the produced tree, and with it the
/// recursion depth of both the parser and the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    max_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Parser {
    /// Create a parser with the default nesting limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser that rejects more than `max_depth` nested parentheses.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// The configured nesting limit.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parse one line of input into a syntax tree.
    pub fn parse(&self, source: &str) -> Result<SyntaxNode> {
        let result = tokenize(source).and_then(|lexemes| {
            let mut cursor = Cursor {
                lexemes,
                pos: 0,
                max_depth: self.max_depth,
            };
            cursor.parse_line()
        });
        if let Err(err) = &result {
            tracing::debug!(error = %err, source, "parse failed");
        }
        result
    }
}

struct Cursor<'src> {
    lexemes: Vec<Lexeme<'src>>,
    pos: usize,
    max_depth: usize,
}

impl<'src> Cursor<'src> {
    fn peek(&self) -> Option<Lexeme<'src>> {
        self.lexemes.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Lexeme<'src>> {
        let lexeme = self.peek();
        if lexeme.is_some() {
            self.pos += 1;
        }
        lexeme
    }

    fn expect(&mut self, token: Token, expected: &'static str) -> Result<Lexeme<'src>> {
        match self.bump() {
            Some(lexeme) if lexeme.token == token => Ok(lexeme),
            Some(lexeme) => Err(unexpected(expected, lexeme)),
            None => Err(ParseError::UnexpectedEnd { expected }),
        }
    }

    /// An operator. The lexer reads `-5` as one number token, but in
    /// operator position it is the operator `-` followed by the number `5`.
    fn expect_operator(&mut self, expected: &'static str) -> Result<Lexeme<'src>> {
        if let Some(slot) = self.lexemes.get_mut(self.pos) {
            let text = slot.text;
            if slot.token == Token::Number {
                if let Some(digits) = text.strip_prefix('-') {
                    let operator = Lexeme {
                        token: Token::Operator,
                        text: &text[..1],
                        column: slot.column,
                    };
                    slot.text = digits;
                    slot.column += 1;
                    return Ok(operator);
                }
            }
        }
        self.expect(Token::Operator, expected)
    }

    fn parse_line(&mut self) -> Result<SyntaxNode> {
        let root = match self.peek() {
            Some(Lexeme {
                token: Token::LParen,
                ..
            }) => self.parse_application(1)?,
            Some(_) => {
                let operator = self.expect_operator("operator or `(`")?;
                let mut children = vec![SyntaxNode::leaf(tag::ANCHOR, "")];
                children.push(SyntaxNode::operator(operator.text));
                children.extend(self.parse_operands(0)?);
                children.push(SyntaxNode::leaf(tag::ANCHOR, ""));
                SyntaxNode::branch(tag::ROOT, children)
            }
            None => {
                return Err(ParseError::UnexpectedEnd {
                    expected: "operator or `(`",
                })
            }
        };
        match self.peek() {
            Some(extra) => Err(ParseError::TrailingInput {
                column: extra.column,
            }),
            None => Ok(root),
        }
    }

    /// `'(' <operator> <expr>+ ')'` at nesting level `depth`.
    fn parse_application(&mut self, depth: usize) -> Result<SyntaxNode> {
        if depth > self.max_depth {
            return Err(ParseError::NestingTooDeep {
                max: self.max_depth,
            });
        }
        let open = self.expect(Token::LParen, "`(`")?;
        let operator = self.expect_operator("operator")?;

        let mut children = vec![
            SyntaxNode::leaf(tag::DELIMITER, open.text),
            SyntaxNode::operator(operator.text),
        ];
        children.extend(self.parse_operands(depth)?);

        let close = self.expect(Token::RParen, "expression or `)`")?;
        children.push(SyntaxNode::leaf(tag::DELIMITER, close.text));
        Ok(SyntaxNode::branch(tag::EXPR, children))
    }

    /// `<expr>+`
    fn parse_operands(&mut self, depth: usize) -> Result<Vec<SyntaxNode>> {
        let mut operands = Vec::new();
        while let Some(lexeme) = self.peek() {
            match lexeme.token {
                Token::Number => {
                    self.pos += 1;
                    operands.push(SyntaxNode::number(lexeme.text));
                }
                Token::LParen => operands.push(self.parse_application(depth + 1)?),
                Token::RParen | Token::Operator => break,
            }
        }
        if operands.is_empty() {
            return Err(match self.peek() {
                Some(lexeme) => unexpected("expression", lexeme),
                None => ParseError::UnexpectedEnd {
                    expected: "expression",
                },
            });
        }
        Ok(operands)
    }
}

fn unexpected(expected: &'static str, found: Lexeme<'_>) -> ParseError {
    ParseError::UnexpectedToken {
        expected,
        found: found.describe(),
        column: found.column,
    }
}
