//! # Lispy
//!
//! A tree-walking evaluator for fully-parenthesized prefix arithmetic.
//!
//! ```
//! use lispy::{evaluate, parse, Value};
//!
//! let tree = parse("(+ 1 (* 2 3))").unwrap();
//! assert_eq!(evaluate(&tree), Value::Number(7));
//! ```
//!
//! ## Architecture
//!
//! - **Syntax**: a logos lexer and a recursive-descent parser turn one line
//!   of input into a tagged [`SyntaxNode`] tree
//! - **Evaluator**: walks the tree, folding operands left to right through
//!   the operator
//! - **Value**: a number or one of a closed set of [`ErrorKind`]s; errors
//!   propagate unchanged, the left-most one wins
//!
//! Evaluation never fails with a Rust error. Only parsing does.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod eval;
pub mod syntax;
pub mod value;

// Re-export main types
pub use context::{EvalContext, OverflowPolicy};
pub use error::{ErrorKind, ParseError, Result};
pub use eval::{apply_operator, apply_operator_with, evaluate, evaluate_with, BinaryOp, Evaluate};
pub use syntax::{parse, Parser, SyntaxNode, DEFAULT_MAX_DEPTH};
pub use value::Value;

/// Lispy version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse and evaluate one line with default settings.
pub fn eval_str(source: &str) -> Result<Value> {
    parse(source).map(|tree| evaluate(&tree))
}
