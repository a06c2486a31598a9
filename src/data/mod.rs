//! The data module defines the operator set that a segment tree is
//! parameterized over, and some ready-made operator sets for common uses.

pub mod example_data;

/// The operators that give a segment tree its meaning.
///
/// An implementor of this trait is a marker type bundling the value domain
/// with three combining functions and a neutral delta. The tree stores no
/// operator state: everything here is static, shared read-only by all
/// nodes of all trees of the same type.
///
/// The tree cannot check that the operators are mathematically consistent
/// with each other. Inconsistent operators don't cause a runtime fault,
/// they silently produce wrong aggregates.
pub trait Operators {
    /// The element type: leaf values, range aggregates and update deltas
    /// all live in this domain.
    type Value: Copy;

    /// Combines the aggregates of two adjacent segments, in range order.
    /// The tree always passes the left segment's aggregate on the left and
    /// never reorders operands.
    ///
    /// Require for all adjacent segments a, b, c:
    /// `merge(a, merge(b, c)) = merge(merge(a, b), c)`.
    fn merge(left: Self::Value, right: Self::Value) -> Self::Value;

    /// Applies a delta onto a stored value, or accumulates one delta onto
    /// another.
    ///
    /// Require: applying a delta to a segment's aggregate must equal
    /// applying it to every position and merging again. This is the
    /// precondition that makes lazy propagation sound.
    fn add(value: Self::Value, delta: Self::Value) -> Self::Value;

    /// Scales a per-position delta to a whole segment of `size` positions.
    ///
    /// Require: `add(aggregate, multiply(delta, size))` must equal adding
    /// `delta` at each of the `size` positions. For sum aggregates this is
    /// `delta * size`; for max/min aggregates the span length is ignored.
    fn multiply(delta: Self::Value, size: usize) -> Self::Value;

    /// The neutral delta: `add(v, IDENTITY)` and
    /// `add(v, multiply(IDENTITY, size))` must leave `v` unchanged, for
    /// any `v` and `size`. Used as the "no pending update" delta.
    ///
    /// Note that this is the identity of `add`, not of `merge`. A max
    /// aggregate under range-add has `IDENTITY = 0`, not minus infinity.
    const IDENTITY: Self::Value;
}
