//! Ready-made operator sets for the common numeric segment trees.
//!
//! Each operator set is an uninhabited marker type; only its associated
//! functions and constants are ever used.

use super::Operators;

/// Sum aggregates with range-add updates.
///
/// `query` returns the sum of the segment, `update` adds a constant to
/// every position in the segment.
pub enum AddSum {}

impl Operators for AddSum {
    type Value = i64;
    fn merge(left: i64, right: i64) -> i64 {
        left + right
    }
    fn add(value: i64, delta: i64) -> i64 {
        value + delta
    }
    fn multiply(delta: i64, size: usize) -> i64 {
        delta * size as i64
    }
    const IDENTITY: i64 = 0;
}

/// Maximum aggregates with range-add updates.
///
/// Adding a constant to every position shifts the maximum by that
/// constant, so `multiply` ignores the span length.
pub enum AddMax {}

impl Operators for AddMax {
    type Value = i64;
    fn merge(left: i64, right: i64) -> i64 {
        left.max(right)
    }
    fn add(value: i64, delta: i64) -> i64 {
        value + delta
    }
    fn multiply(delta: i64, _size: usize) -> i64 {
        delta
    }
    const IDENTITY: i64 = 0;
}

/// Minimum aggregates with range-add updates.
pub enum AddMin {}

impl Operators for AddMin {
    type Value = i64;
    fn merge(left: i64, right: i64) -> i64 {
        left.min(right)
    }
    fn add(value: i64, delta: i64) -> i64 {
        value + delta
    }
    fn multiply(delta: i64, _size: usize) -> i64 {
        delta
    }
    const IDENTITY: i64 = 0;
}
