//! Value representation for evaluation results

mod display;
mod impls;

use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;

/// The result of evaluating any subtree.
///
/// A value is scalar: it never contains another value or a reference into
/// the syntax tree, so it is `Copy` and lives no longer than the evaluation
/// that produced it (or the caller that keeps it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// Machine-word signed integer
    Number(i64),

    /// A failed evaluation
    Error(ErrorKind),
}
