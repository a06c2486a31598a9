//! The segment tree itself.
//!
//! The tree is its own root node: every node covers a contiguous index
//! range, owns its two sons exclusively, and carries the `merge`-aggregate
//! of its range together with an optional pending delta that has not been
//! pushed to the sons yet.

use crate::data::Operators;
use crate::error::RangeError;

const PARTIAL_LEAF_ERROR: &str = "operation range escaped the covered range";

/// A segment tree node covering the index range `[left, right]`.
///
/// Built once from an input slice and never resized; after construction
/// only the aggregates and the pending deltas mutate, through
/// [`update`](SegmentTree::update).
///
/// The aggregate of every node is kept consistent with the updates applied
/// so far, computed as if its pending delta had already reached all of its
/// descendants, even while the delta physically still sits at the node.
pub struct SegmentTree<O: Operators> {
    left: usize,
    right: usize,
    value: O::Value,
    pending: O::Value,
    has_pending: bool,
    /// Present iff `left < right`. Covers `[left, mid]` and
    /// `[mid + 1, right]` respectively.
    sons: Option<Box<(SegmentTree<O>, SegmentTree<O>)>>,
}

impl<O: Operators> core::fmt::Debug for SegmentTree<O>
where
    O::Value: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SegmentTree")
            .field("left", &self.left)
            .field("right", &self.right)
            .field("value", &self.value)
            .field("pending", &self.pending)
            .field("has_pending", &self.has_pending)
            .field("sons", &self.sons)
            .finish()
    }
}

impl<O: Operators> SegmentTree<O> {
    /// Builds a tree covering `[left, right]` from the given slice.
    ///
    /// The slice is read here and never again; the tree keeps its own
    /// copies of the values and never writes back.
    ///
    /// Fails if `right < left` or if `right` is past the last valid index
    /// of `elements`.
    pub fn new(elements: &[O::Value], left: usize, right: usize) -> Result<Self, RangeError> {
        if right < left {
            return Err(RangeError::Inverted { left, right });
        }
        if right >= elements.len() {
            return Err(RangeError::OutOfBounds {
                right,
                len: elements.len(),
            });
        }
        Ok(Self::build(elements, left, right))
    }

    /// Builds a tree covering the whole slice. Fails on an empty slice.
    pub fn from_slice(elements: &[O::Value]) -> Result<Self, RangeError> {
        if elements.is_empty() {
            return Err(RangeError::OutOfBounds { right: 0, len: 0 });
        }
        Self::new(elements, 0, elements.len() - 1)
    }

    // The only place nodes are created. Bounds are already validated.
    fn build(elements: &[O::Value], left: usize, right: usize) -> Self {
        let (value, sons) = if left == right {
            (elements[left], None)
        } else {
            let mid = left + (right - left) / 2;
            let left_son = Self::build(elements, left, mid);
            let right_son = Self::build(elements, mid + 1, right);
            let value = O::merge(left_son.value, right_son.value);
            (value, Some(Box::new((left_son, right_son))))
        };
        SegmentTree {
            left,
            right,
            value,
            pending: O::IDENTITY,
            has_pending: false,
            sons,
        }
    }

    /// The left endpoint of the covered range.
    pub fn left(&self) -> usize {
        self.left
    }

    /// The right endpoint of the covered range.
    pub fn right(&self) -> usize {
        self.right
    }

    /// The number of positions the tree covers.
    pub fn size(&self) -> usize {
        self.right - self.left + 1
    }

    fn mid(&self) -> usize {
        self.left + (self.right - self.left) / 2
    }

    /// Pushes this node's pending delta one level down and clears it.
    ///
    /// Deltas recorded on a whole segment are propagated only when an
    /// operation needs to look inside that segment; this is what keeps
    /// range updates and queries logarithmic. A leaf keeps its delta in
    /// place: its value already includes it, and there is nowhere to push.
    fn push_down(&mut self) {
        if !self.has_pending {
            return;
        }
        let delta = self.pending;
        let sons = match self.sons.as_deref_mut() {
            Some(sons) => sons,
            None => return,
        };
        for son in [&mut sons.0, &mut sons.1] {
            son.value = O::add(son.value, O::multiply(delta, son.size()));
            son.pending = O::add(son.pending, delta);
            son.has_pending = true;
        }
        self.pending = O::IDENTITY;
        self.has_pending = false;
    }

    /// Applies `val` as a per-position delta to every index in
    /// `[left, right]`.
    ///
    /// Endpoints outside the covered range are silently intersected with
    /// it; a range that misses the covered range entirely is a no-op.
    /// Fails if `right < left`, in which case nothing is mutated.
    pub fn update(&mut self, left: usize, right: usize, val: O::Value) -> Result<(), RangeError> {
        if right < left {
            return Err(RangeError::Inverted { left, right });
        }
        let left = left.max(self.left);
        let right = right.min(self.right);
        if right < left {
            return Ok(());
        }
        self.update_rec(left, right, val);
        Ok(())
    }

    // Precondition: [left, right] is non-empty and lies within
    // [self.left, self.right]. The recursion preserves it: a son is
    // entered only when the range reaches its half.
    fn update_rec(&mut self, left: usize, right: usize, val: O::Value) {
        self.push_down();
        if left <= self.left && right >= self.right {
            // full cover: record the delta here and stop recursing
            self.value = O::add(self.value, O::multiply(val, self.size()));
            self.pending = O::add(self.pending, val);
            self.has_pending = true;
            return;
        }
        let mid = self.mid();
        let sons = self.sons.as_deref_mut().expect(PARTIAL_LEAF_ERROR);
        if left <= mid {
            sons.0.update_rec(left, right, val);
        }
        if right > mid {
            sons.1.update_rec(left, right, val);
        }
        self.value = O::merge(sons.0.value, sons.1.value);
    }

    /// Returns the `merge`-aggregate over `[left, right]`, intersected
    /// with the covered range.
    ///
    /// Takes `&mut self` because answering a query may push pending deltas
    /// down the tree; that only redistributes already-recorded updates and
    /// never changes the observable aggregate of any range.
    ///
    /// Fails if `right < left`. Panics if the range does not overlap the
    /// covered range at all.
    pub fn query(&mut self, left: usize, right: usize) -> Result<O::Value, RangeError> {
        if right < left {
            return Err(RangeError::Inverted { left, right });
        }
        let left = left.max(self.left);
        let right = right.min(self.right);
        assert!(left <= right, "query range does not overlap the covered range");
        Ok(self.query_rec(left, right))
    }

    // Same precondition as `update_rec`.
    fn query_rec(&mut self, left: usize, right: usize) -> O::Value {
        self.push_down();
        if left <= self.left && right >= self.right {
            return self.value;
        }
        let mid = self.mid();
        let sons = self.sons.as_deref_mut().expect(PARTIAL_LEAF_ERROR);
        if left <= mid && right > mid {
            O::merge(sons.0.query_rec(left, right), sons.1.query_rec(left, right))
        } else if left <= mid {
            sons.0.query_rec(left, right)
        } else {
            sons.1.query_rec(left, right)
        }
    }
}
