//! Error types.

use thiserror::Error;

/// Rejected range for a bounded random draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// `min` was not strictly below `max`.
    #[error("empty range: min ({min}) must be less than max ({max})")]
    EmptyRange {
        /// Requested lower bound (inclusive)
        min: i32,
        /// Requested upper bound (exclusive)
        max: i32,
    },
}
