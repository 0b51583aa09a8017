//! The exact zero-divisor relation, defined via the double annihilator closure.
use crate::annihilator::*;

use std::collections::BTreeSet;

/// Precomputed `ann(x)` and `ann(ann(x))` for every element `x` of the ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnihilatorTable {
    pub ann: Vec<ElementSet>,
    pub ann_ann: Vec<ElementSet>,
}

impl AnnihilatorTable {
    pub fn new(pairs: &Relation) -> Self {
        let ann: Vec<ElementSet> = pairs
            .ring
            .elements()
            .map(|x| annihilator(x, pairs))
            .collect();
        let ann_ann = ann
            .iter()
            .map(|a| annihilator_of_set(a, pairs))
            .collect();
        AnnihilatorTable { ann, ann_ann }
    }

    /// True when `ann(x) = ann(ann(y))`.
    pub fn is_exact(&self, x: u64, y: u64) -> bool {
        self.ann[x as usize] == self.ann_ann[y as usize]
    }
}

/// All `(x, y)` with `ann(x) = ann(ann(y))`.
///
/// The relation is directed: the closure is applied twice to `y` and once to `x`, and `(y, x)`
/// need not be present when `(x, y)` is.
pub fn exact_pairs(pairs: &Relation) -> Relation {
    let table = AnnihilatorTable::new(pairs);
    let ring = pairs.ring;
    let mut exact: BTreeSet<Pair> = BTreeSet::new();
    for x in ring.elements() {
        for y in ring.elements() {
            if table.is_exact(x, y) {
                exact.insert((x, y));
            }
        }
    }
    tracing::debug!(n = ring.modulus(), exact = exact.len(), "computed exact pairs");
    Relation::new(ring, exact)
}
