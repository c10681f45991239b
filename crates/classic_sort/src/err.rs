//! Error types for the `classic_sort` crate

use crate::SortAlgorithm;

/// Precondition violations reported by the range-based helpers and the
/// RAM-model sorts.
///
/// Whole-sequence comparison sorts have no failure mode and return `()`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An index does not lie in `[0, len)`.
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// An inclusive range `[start, end]` with `start > end`.
    #[error("invalid range: start {start} is greater than end {end}")]
    InvalidRange { start: usize, end: usize },

    /// The merge destination does not hold exactly both inputs.
    #[error("merge destination has length {result}, expected {left} + {right}")]
    MergeLengthMismatch {
        left: usize,
        right: usize,
        result: usize,
    },

    /// A record key exceeds the declared maximum key.
    ///
    /// Reported before the sequence is touched, so the input is left as it was.
    #[error("key {key} at index {index} exceeds the maximum key {max_key}")]
    KeyOutOfRange {
        index: usize,
        key: usize,
        max_key: usize,
    },

    /// Counting sort cannot allocate `max_key + 1` buckets.
    #[error("maximum key {max_key} leaves no room for a bucket table")]
    KeyBoundTooLarge { max_key: usize },

    /// Radix sort needs a base of at least two.
    #[error("radix base must be at least 2, got {base}")]
    InvalidRadix { base: usize },

    /// A RAM-model algorithm was asked to sort opaque, comparison-only elements.
    #[error("{algorithm} needs integer keys, use `sort_keyed`")]
    UnsupportedModel { algorithm: SortAlgorithm },
}
