use thiserror::Error;

use crate::array::DataType;

/// Errors surfaced by the array backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArrayError {
    #[error("timestamp values must be strictly increasing (violation at index {index})")]
    NotMonotonic { index: usize },

    #[error("integer range end {end} is before start {start}")]
    InvertedRange { start: i64, end: i64 },

    #[error("scalar at index {index} is {found}, expected {expected}")]
    MixedTypes {
        index: usize,
        found: DataType,
        expected: DataType,
    },
}
