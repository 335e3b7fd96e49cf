//! Expression evaluation

pub mod binary;
pub mod literal;

pub use binary::{apply_operator, apply_operator_with, BinaryOp};
pub use literal::parse_number;

use crate::error::ErrorKind;
use crate::{EvalContext, SyntaxNode, Value};

/// Trait for evaluating syntax nodes to values.
///
/// Evaluation is total: every failure is reported as a [`Value::Error`]
/// rather than through a `Result`.
pub trait Evaluate {
    /// Evaluate this node under the given context.
    fn eval(&self, ctx: &EvalContext) -> Value;
}

impl Evaluate for SyntaxNode {
    fn eval(&self, ctx: &EvalContext) -> Value {
        if self.is_number() {
            let value = Value::from(parse_number(&self.contents));
            tracing::trace!(literal = %self.contents, %value, "number");
            return value;
        }

        // The operator is always the second child and is never evaluated;
        // the first operand is always the third.
        let (Some(operator), Some(first)) = (self.child(1), self.child(2)) else {
            tracing::debug!(tag = %self.tag, children = self.children.len(), "malformed application");
            return Value::Error(ErrorKind::BadOperator);
        };
        let symbol = operator.contents.as_str();

        let mut acc = first.eval(ctx);
        for operand in self.children.iter().skip(3).take_while(|c| c.is_operand()) {
            acc = apply_operator_with(ctx, acc, symbol, operand.eval(ctx));
        }
        tracing::trace!(tag = %self.tag, symbol, value = %acc, "application");
        acc
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate a tree with the default context.
pub fn evaluate(node: &SyntaxNode) -> Value {
    node.eval(&EvalContext::default())
}

/// Evaluate a tree with an explicit context.
pub fn evaluate_with(node: &SyntaxNode, ctx: &EvalContext) -> Value {
    node.eval(ctx)
}
