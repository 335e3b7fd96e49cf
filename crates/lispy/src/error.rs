//! Error types for parsing and evaluation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of evaluation failures.
///
/// An `ErrorKind` is never raised; it is carried inside
/// [`Value::Error`](crate::Value::Error) and propagated unchanged through
/// every enclosing operator application.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A numeric literal could not be represented as an `i64`, or checked
    /// arithmetic overflowed.
    #[error("invalid number")]
    BadNumber,

    /// The right operand of `/` was exactly zero.
    #[error("division by zero")]
    DivideByZero,

    /// The operator symbol is not one of `+ - * /`, or the application node
    /// is missing its operator or first operand.
    #[error("bad operator")]
    BadOperator,
}

/// Errors produced while turning source text into a syntax tree.
///
/// Columns are 1-based; input is always a single line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character that starts no token
    #[error("unexpected character at column {column}")]
    UnexpectedCharacter {
        /// Column of the offending character
        column: usize,
    },

    /// A token that does not fit the grammar at this point
    #[error("expected {expected}, found {found} at column {column}")]
    UnexpectedToken {
        /// What the grammar allows here
        expected: &'static str,
        /// Description of the token found
        found: String,
        /// Column where the token starts
        column: usize,
    },

    /// Input ended while the grammar still needed something
    #[error("expected {expected}, found end of input")]
    UnexpectedEnd {
        /// What the grammar allows here
        expected: &'static str,
    },

    /// A complete expression was followed by more tokens
    #[error("unexpected trailing input at column {column}")]
    TrailingInput {
        /// Column of the first extra token
        column: usize,
    },

    /// Parentheses nested deeper than the parser allows
    #[error("nesting depth exceeded (max {max})")]
    NestingTooDeep {
        /// The configured limit
        max: usize,
    },
}

impl ParseError {
    /// The 1-based column this error points at, if it has one.
    pub fn column(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedCharacter { column }
            | ParseError::UnexpectedToken { column, .. }
            | ParseError::TrailingInput { column } => Some(*column),
            ParseError::UnexpectedEnd { .. } | ParseError::NestingTooDeep { .. } => None,
        }
    }
}

/// Result type alias for parsing
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_messages() {
        assert_eq!(ErrorKind::BadNumber.to_string(), "invalid number");
        assert_eq!(ErrorKind::DivideByZero.to_string(), "division by zero");
        assert_eq!(ErrorKind::BadOperator.to_string(), "bad operator");
    }

    #[test]
    fn test_parse_error_column() {
        assert_eq!(ParseError::TrailingInput { column: 4 }.column(), Some(4));
        assert_eq!(
            ParseError::UnexpectedEnd {
                expected: "operator"
            }
            .column(),
            None
        );
        assert_eq!(ParseError::NestingTooDeep { max: 2 }.column(), None);
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::UnexpectedToken {
            expected: "operator",
            found: "number `1`".to_string(),
            column: 2,
        };
        assert_eq!(
            err.to_string(),
            "expected operator, found number `1` at column 2"
        );
    }
}
