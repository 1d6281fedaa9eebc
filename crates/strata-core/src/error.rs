//! Error types for checked array access.

use crate::index::{Index3, SignedIndex3};
use std::error::Error;
use std::fmt;

/// Errors returned by the checked tier of the array API.
///
/// The unchecked accessors never produce these; they treat out-of-range
/// indices as a caller bug.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An unsigned index triple lies outside the array shape.
    IndexOutOfBounds {
        /// The offending triple.
        index: Index3,
        /// The array dimensions `[D3, D2, D1]`.
        dims: Index3,
    },
    /// A signed index triple is negative or lies outside the array shape.
    SignedIndexOutOfBounds {
        /// The offending triple.
        index: SignedIndex3,
        /// The array dimensions `[D3, D2, D1]`.
        dims: Index3,
    },
    /// A linear offset is not below the buffer size.
    LinearIndexOutOfBounds {
        /// The offending offset.
        index: usize,
        /// Total number of slots.
        size: usize,
    },
    /// A range was requested whose end offset precedes its start offset.
    InvertedRange {
        /// Linear offset of the range start.
        start: usize,
        /// Linear offset of the range end.
        end: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, dims } => {
                write!(f, "index {index:?} out of bounds for dimensions {dims:?}")
            }
            Self::SignedIndexOutOfBounds { index, dims } => {
                write!(
                    f,
                    "signed index {index:?} out of bounds for dimensions {dims:?}"
                )
            }
            Self::LinearIndexOutOfBounds { index, size } => {
                write!(f, "linear index {index} out of bounds for size {size}")
            }
            Self::InvertedRange { start, end } => {
                write!(f, "range end {end} precedes start {start}")
            }
        }
    }
}

impl Error for ArrayError {}
