//! Transitivity engine: closes new pairwise evidence over each voter's
//! per-candidate dominance list, applying certificate updates for every
//! newly-inferred pair without re-conditioning the belief on them.
//!
//! The forward/backward pass below is a single step, not a fixpoint: each
//! voter's dominance lists are already transitively closed from prior
//! updates, so one new preference can extend the closure by at most one hop
//! in each direction.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;

use bv_core::query::{AskedSet, Query};

use crate::certificate::Certificate;

/// `dominance[v][c]` is the set of candidates voter `v` is known to rank
/// strictly below `c`.
#[derive(Clone, Debug)]
pub struct DominanceLists {
    lists: Vec<Vec<BTreeSet<usize>>>,
}

impl DominanceLists {
    pub fn new(n: usize, m: usize) -> Self {
        Self {
            lists: vec![vec![BTreeSet::new(); m]; n],
        }
    }

    #[inline]
    pub fn dominates(&self, v: usize, c: usize) -> &BTreeSet<usize> {
        &self.lists[v][c]
    }
}

/// Integrate the oracle's answer for `(voter, a, b)` — `a_preferred` is true
/// iff the voter prefers `a` to `b` — into the dominance lists and the
/// certificate. Returns the list of additional canonical queries implied by
/// transitive closure, which are inserted into `asked` as a side effect (the
/// original answer's own query must already be inserted by the caller).
pub fn apply_answer(
    dominance: &mut DominanceLists,
    certificate: &mut Certificate,
    asked: &mut AskedSet,
    voter: usize,
    a: usize,
    b: usize,
    a_preferred: bool,
) -> Vec<Query> {
    let (best, worst) = if a_preferred { (a, b) } else { (b, a) };

    dominance.lists[voter][best].insert(worst);
    certificate.record_preference(best, worst);

    let mut inferred = Vec::new();

    // Forward closure: everything worst dominates, best now dominates too.
    let worst_dominates: Vec<usize> = dominance.lists[voter][worst].iter().copied().collect();
    for x in worst_dominates {
        if dominance.lists[voter][best].insert(x) {
            certificate.record_preference(best, x);
            let q = Query::canonical(voter, best, x);
            if asked.insert(q) {
                inferred.push(q);
            }
        }
    }

    // Backward closure: everything that dominates best also dominates worst.
    let m = dominance.lists[voter].len();
    for c in 0..m {
        if dominance.lists[voter][c].contains(&best) && !dominance.lists[voter][c].contains(&worst) {
            dominance.lists[voter][c].insert(worst);
            certificate.record_preference(c, worst);
            let q = Query::canonical(voter, c, worst);
            if asked.insert(q) {
                inferred.push(q);
            }
        }
    }

    inferred
}
