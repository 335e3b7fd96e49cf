//! Evaluation context configuration

/// How `+`, `-`, `*` and `/` behave when the exact result does not fit in
/// an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Overflow produces `Error(BadNumber)`.
    #[default]
    Checked,

    /// Overflow wraps around (two's complement).
    Wrapping,
}

/// Configuration for evaluation.
///
/// This is passed through all evaluation calls. It holds no mutable state,
/// so one context can be shared by any number of evaluations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalContext {
    /// Arithmetic overflow behavior
    pub overflow: OverflowPolicy,
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a specific overflow policy.
    pub fn with_overflow(overflow: OverflowPolicy) -> Self {
        Self { overflow }
    }
}
