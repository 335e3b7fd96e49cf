//! Operator application

use crate::context::OverflowPolicy;
use crate::error::ErrorKind;
use crate::{EvalContext, Value};

/// The arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating
    Div,
}

impl BinaryOp {
    /// Look up an operator by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            _ => None,
        }
    }

    /// The operator's symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

/// Combine two values under `symbol` with the default context.
pub fn apply_operator(left: Value, symbol: &str, right: Value) -> Value {
    apply_operator_with(&EvalContext::default(), left, symbol, right)
}

/// Combine two values under `symbol`.
///
/// An error on the left wins over an error on the right; either is returned
/// unchanged. The symbol is only checked once both sides are numbers.
pub fn apply_operator_with(ctx: &EvalContext, left: Value, symbol: &str, right: Value) -> Value {
    let (a, b) = match (left, right) {
        (Value::Error(_), _) => return left,
        (_, Value::Error(_)) => return right,
        (Value::Number(a), Value::Number(b)) => (a, b),
    };

    let result = match BinaryOp::from_symbol(symbol) {
        Some(op) => eval_numeric(ctx.overflow, op, a, b),
        None => Err(ErrorKind::BadOperator),
    };
    if let Err(kind) = result {
        tracing::debug!(a, symbol, b, error = %kind, "operator application failed");
    }
    Value::from(result)
}

fn eval_numeric(policy: OverflowPolicy, op: BinaryOp, a: i64, b: i64) -> Result<i64, ErrorKind> {
    if op == BinaryOp::Div && b == 0 {
        return Err(ErrorKind::DivideByZero);
    }
    match policy {
        OverflowPolicy::Checked => {
            let result = match op {
                BinaryOp::Add => a.checked_add(b),
                BinaryOp::Sub => a.checked_sub(b),
                BinaryOp::Mul => a.checked_mul(b),
                BinaryOp::Div => a.checked_div(b),
            };
            result.ok_or(ErrorKind::BadNumber)
        }
        OverflowPolicy::Wrapping => Ok(match op {
            BinaryOp::Add => a.wrapping_add(b),
            BinaryOp::Sub => a.wrapping_sub(b),
            BinaryOp::Mul => a.wrapping_mul(b),
            BinaryOp::Div => a.wrapping_div(b),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: i64) -> Value {
        Value::Number(n)
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(apply_operator(num(2), "+", num(3)), num(5));
        assert_eq!(apply_operator(num(2), "-", num(3)), num(-1));
        assert_eq!(apply_operator(num(4), "*", num(-3)), num(-12));
        assert_eq!(apply_operator(num(7), "/", num(2)), num(3));
        assert_eq!(apply_operator(num(-7), "/", num(2)), num(-3));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            apply_operator(num(1), "/", num(0)),
            Value::Error(ErrorKind::DivideByZero)
        );
        assert_eq!(
            apply_operator(num(0), "/", num(0)),
            Value::Error(ErrorKind::DivideByZero)
        );
    }

    #[test]
    fn test_bad_operator() {
        assert_eq!(
            apply_operator(num(1), "%", num(2)),
            Value::Error(ErrorKind::BadOperator)
        );
        assert_eq!(
            apply_operator(num(1), "", num(2)),
            Value::Error(ErrorKind::BadOperator)
        );
    }

    #[test]
    fn test_left_error_wins() {
        let left = Value::Error(ErrorKind::DivideByZero);
        let right = Value::Error(ErrorKind::BadOperator);
        assert_eq!(apply_operator(left, "+", right), left);
        assert_eq!(apply_operator(num(1), "+", right), right);
        // Errors propagate before the symbol is looked at
        assert_eq!(apply_operator(left, "?", num(1)), left);
    }

    #[test]
    fn test_checked_overflow() {
        let bad = Value::Error(ErrorKind::BadNumber);
        assert_eq!(apply_operator(num(i64::MAX), "+", num(1)), bad);
        assert_eq!(apply_operator(num(i64::MIN), "-", num(1)), bad);
        assert_eq!(apply_operator(num(i64::MAX), "*", num(2)), bad);
        assert_eq!(apply_operator(num(i64::MIN), "/", num(-1)), bad);
    }

    #[test]
    fn test_wrapping_overflow() {
        let ctx = EvalContext::with_overflow(OverflowPolicy::Wrapping);
        assert_eq!(apply_operator_with(&ctx, num(i64::MAX), "+", num(1)), num(i64::MIN));
        assert_eq!(apply_operator_with(&ctx, num(i64::MIN), "-", num(1)), num(i64::MAX));
        assert_eq!(apply_operator_with(&ctx, num(i64::MAX), "*", num(2)), num(-2));
        assert_eq!(apply_operator_with(&ctx, num(i64::MIN), "/", num(-1)), num(i64::MIN));
        assert_eq!(
            apply_operator_with(&ctx, num(5), "/", num(0)),
            Value::Error(ErrorKind::DivideByZero)
        );
    }

    #[test]
    fn test_symbol_round_trip() {
        for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div] {
            assert_eq!(BinaryOp::from_symbol(op.symbol()), Some(op));
        }
    }
}
