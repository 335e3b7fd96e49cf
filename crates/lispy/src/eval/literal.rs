//! Numeric literal evaluation

use crate::error::ErrorKind;

/// Parse a numeric leaf's text as a base-10 `i64`.
///
/// Accepts an optional leading sign followed by ASCII digits. Anything else,
/// including values outside the `i64` range, is `BadNumber`.
pub fn parse_number(text: &str) -> Result<i64, ErrorKind> {
    text.parse::<i64>().map_err(|_| ErrorKind::BadNumber)
}
