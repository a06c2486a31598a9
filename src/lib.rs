//! A recursive segment tree with lazy range updates.
//!
//! The tree covers a contiguous index range `[left, right]` of an input
//! array, and answers range aggregation queries and range "add-style"
//! updates in `O(log n)` amortized time. It is generic over a value type
//! and a set of user-supplied operators (see [`Operators`]): `merge`
//! combines the aggregates of two adjacent segments, `add` applies a delta
//! onto a value, and `multiply` scales a per-position delta to a whole
//! segment.
//!
//! Updates applied to a whole node's segment are not propagated to the
//! node's sons immediately. Instead they are recorded as a pending delta,
//! and pushed down one level only when an operation actually needs to look
//! inside that segment. This is what keeps range updates logarithmic
//! instead of linear.
//!
//! # Example
//!
//! ```
//! use coppice::{example_data::AddSum, SegmentTree};
//!
//! let mut tree = SegmentTree::<AddSum>::from_slice(&[1, 2, 3, 4, 5]).unwrap();
//! assert_eq!(tree.query(0, 4).unwrap(), 15);
//! tree.update(1, 3, 10).unwrap(); // conceptually [1, 12, 13, 14, 5]
//! assert_eq!(tree.query(1, 3).unwrap(), 39);
//! assert_eq!(tree.query(0, 0).unwrap(), 1);
//! ```
//!
//! # Concurrency
//!
//! The tree is a plain single-threaded structure: `update` and `query`
//! both take `&mut self`, since even a query may redistribute pending
//! deltas down the tree. Callers that need concurrent access must
//! serialize it externally, e.g. with one exclusive lock per tree, or by
//! partitioning the data into trees over disjoint index ranges.

pub mod data;
pub mod error;
pub mod tree;

pub use data::example_data;
pub use data::Operators; // because everyone will need to specify Operators for the generic parameters
pub use error::RangeError;
pub use tree::SegmentTree;
