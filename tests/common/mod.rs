use coppice::{Operators, SegmentTree};
use rand::Rng;
use std::fmt::Debug;

/// A naive reference model: applies updates position by position and
/// answers queries by folding `merge` left-to-right over the raw values.
pub struct Reference<O: Operators> {
    values: Vec<O::Value>,
}

impl<O: Operators> Reference<O> {
    pub fn new(values: &[O::Value]) -> Self {
        Reference {
            values: values.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn update(&mut self, left: usize, right: usize, val: O::Value) {
        for value in &mut self.values[left..=right] {
            *value = O::add(*value, val);
        }
    }

    pub fn query(&self, left: usize, right: usize) -> O::Value {
        self.values[left..=right]
            .iter()
            .copied()
            .reduce(|a, b| O::merge(a, b))
            .expect("empty query range")
    }
}

/// Something to perform in one round of tests.
#[derive(Clone, Copy, Debug)]
pub enum Round<V> {
    Update { left: usize, right: usize, val: V },
    Query { left: usize, right: usize },
}

pub fn random_range(rng: &mut impl Rng, len: usize) -> (usize, usize) {
    let a = rng.gen_range(0..len);
    let b = rng.gen_range(0..len);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn random_round<O>(rng: &mut impl Rng, len: usize, max_delta: i64) -> Round<O::Value>
where
    O: Operators<Value = i64>,
{
    let (left, right) = random_range(rng, len);
    if rng.gen() {
        Round::Update {
            left,
            right,
            val: rng.gen_range(-max_delta..=max_delta),
        }
    } else {
        Round::Query { left, right }
    }
}

/// Runs random update/query rounds against both the tree and the naive
/// reference model, checking that every query agrees, and that the
/// whole-range aggregate agrees after every round.
pub fn check_consistency<O>(initial: &[O::Value], num_rounds: u32, max_delta: i64)
where
    O: Operators<Value = i64>,
    O::Value: PartialEq + Debug,
{
    let mut rng = rand::thread_rng();
    let mut tree = SegmentTree::<O>::from_slice(initial).unwrap();
    let mut reference = Reference::<O>::new(initial);

    for _ in 0..num_rounds {
        match random_round::<O>(&mut rng, reference.len(), max_delta) {
            Round::Update { left, right, val } => {
                tree.update(left, right, val).unwrap();
                reference.update(left, right, val);
            }
            Round::Query { left, right } => {
                assert_eq!(tree.query(left, right).unwrap(), reference.query(left, right));
            }
        }
        let whole = (0, reference.len() - 1);
        assert_eq!(
            tree.query(whole.0, whole.1).unwrap(),
            reference.query(whole.0, whole.1)
        );
    }
}
