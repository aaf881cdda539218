//! Record-level parse failures.

use thiserror::Error;

/// Why a raw day record was skipped instead of parsed.
///
/// Dish text never produces an error; only the date field can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The record has no date field.
    #[error("record has no date")]
    MissingDate,

    /// The date field is not an 8-digit `YYYYMMDD` calendar date.
    #[error("malformed date: {0:?}")]
    MalformedDate(String),
}
