//! Zero-divisor relations and annihilator sets over `Z_n`.
use crate::ring::Ring;

use std::collections::BTreeSet;

/// An ordered pair `(x, y)` of ring elements.
pub type Pair = (u64, u64);

/// A set of ring elements, iterated in ascending order.
pub type ElementSet = BTreeSet<u64>;

/// A binary relation on the elements of a ring, stored as ordered pairs.
///
/// Pairs are kept sorted, so all pairs with a given first component form a contiguous range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub ring: Ring,
    pub pairs: BTreeSet<Pair>,
}

impl Relation {
    pub fn new(ring: Ring, pairs: BTreeSet<Pair>) -> Self {
        Relation { ring, pairs }
    }

    pub fn contains(&self, x: u64, y: u64) -> bool {
        self.pairs.contains(&(x, y))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Pair> + '_ {
        self.pairs.iter().copied()
    }

    /// All `y` related to `x`.
    pub fn image(&self, x: u64) -> impl Iterator<Item = u64> + '_ {
        self.pairs.range((x, 0)..=(x, u64::MAX)).map(|&(_, y)| y)
    }
}

/// The zero-divisor relation of `Z_n`: every `(x, y)` with `x * y = 0 (mod n)`.
///
/// Pairs involving `0` are included.
pub fn zero_divisor_pairs(ring: Ring) -> Relation {
    let pairs = ring
        .elements()
        .flat_map(move |x| {
            ring.elements()
                .filter(move |&y| ring.mul(x, y) == 0)
                .map(move |y| (x, y))
        })
        .collect();
    Relation::new(ring, pairs)
}

/// `ann(x)`: the set of `y` such that `(x, y)` is in `pairs`.
pub fn annihilator(x: u64, pairs: &Relation) -> ElementSet {
    pairs.image(x).collect()
}

/// `ann(S)`: the intersection of `ann(x)` over `x ∈ S`.
///
/// The annihilator of the empty set is the whole ring.
pub fn annihilator_of_set<'a, I>(s: I, pairs: &Relation) -> ElementSet
where
    I: IntoIterator<Item = &'a u64>,
{
    let mut result: Option<ElementSet> = None;
    for &x in s {
        let ann_x = annihilator(x, pairs);
        result = Some(match result {
            None => ann_x,
            Some(acc) => acc.intersection(&ann_x).copied().collect(),
        });
        if result.as_ref().is_some_and(|r| r.is_empty()) {
            break;
        }
    }
    result.unwrap_or_else(|| pairs.ring.elements().collect())
}
