//! Value constructors, predicates, extractors and From traits

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a number value
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    /// Create an error value
    pub fn error(kind: ErrorKind) -> Self {
        Value::Error(kind)
    }
}

// ═══════════════════════════════════════════════════════════════════
// Predicates
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Check if value is a number
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Check if value is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

// ═══════════════════════════════════════════════════════════════════
// Extractors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Extract the number, if this is one
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Error(_) => None,
        }
    }

    /// Extract the error kind, if this is an error
    pub fn as_error(&self) -> Option<ErrorKind> {
        match self {
            Value::Error(kind) => Some(*kind),
            Value::Number(_) => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<ErrorKind> for Value {
    fn from(kind: ErrorKind) -> Self {
        Value::Error(kind)
    }
}

impl From<Result<i64, ErrorKind>> for Value {
    fn from(result: Result<i64, ErrorKind>) -> Self {
        match result {
            Ok(n) => Value::Number(n),
            Err(kind) => Value::Error(kind),
        }
    }
}
