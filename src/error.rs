//! Errors reported by `CircularArray` operations.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error value for a failed `CircularArray` operation.
///
/// None of these are fatal; the array is left unchanged when one is
/// returned.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// A logical index at or past the end of the array.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Length of the array at the time of the call.
        len: usize,
    },

    /// A range whose start lies after its end.
    #[error("range {start}..{end} is reversed")]
    InvalidRange {
        /// First index of the range.
        start: usize,
        /// One past the last index of the range.
        end: usize,
    },

    /// Removal from an empty array.
    #[error("cannot delete from an empty array")]
    EmptyContainer,

    /// A selection rank outside `1..=len`.
    #[error("rank {rank} is outside 1..={len}")]
    InvalidArgument {
        /// The rejected 1-based rank.
        rank: usize,
        /// Length of the array at the time of the call.
        len: usize,
    },

    /// A radix pass count wider than the element's key.
    #[error("cannot radix sort on {bits} bits, the key is only {max} bits wide")]
    InvalidBitCount {
        /// The requested number of passes.
        bits: u32,
        /// Width of the element's radix key.
        max: u32,
    },
}
