//! The single error kind the tree can produce.

use thiserror::Error;

/// Raised synchronously for bad caller-supplied range arguments.
///
/// Every failing check happens before any mutation, so a `RangeError`
/// always leaves the tree unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The range's right endpoint is smaller than its left endpoint.
    #[error("inverted range: right ({right}) < left ({left})")]
    Inverted { left: usize, right: usize },
    /// At construction, the right endpoint lies past the last valid index
    /// of the input slice.
    #[error("right endpoint {right} is out of bounds for {len} elements")]
    OutOfBounds { right: usize, len: usize },
}
