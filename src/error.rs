//! Errors reported by the checked dispatch layer.
//!
//! The sorts themselves cannot fail; only range validation and algorithm lookup can.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("range {start}..{end} is out of bounds for a sequence of length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    #[error("range start {start} is greater than range end {end}")]
    InvertedRange { start: usize, end: usize },

    #[error("unknown sorting algorithm `{0}`")]
    UnknownAlgorithm(String),
}
