//! Highest Expected Score heuristic for Borda (ESB): scores each query by how
//! much it is expected to raise the peak of the winning-probability
//! distribution.

use alloc::vec::Vec;

use bv_core::belief::Belief;
use bv_core::permutation::PermutationIndex;
use bv_core::query::AskedSet;
use bv_core::rng::BvRng;

use super::{unasked_pairs, ScoredQuery};
use crate::win_proba::win_proba;

fn max_of(p: &[f64]) -> f64 {
    p.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Weighted expected maximum for every unasked canonical query.
pub fn score_all(
    belief: &Belief,
    perm_index: &PermutationIndex,
    gamma: usize,
    asked: &AskedSet,
    rng: &mut BvRng,
) -> Vec<ScoredQuery> {
    let base_max = max_of(&win_proba(belief, perm_index, gamma, rng));
    let mut out = Vec::new();

    for q in unasked_pairs(belief.n(), perm_index.m(), asked) {
        let (voter, a, b) = (q.voter, q.a, q.b);
        let fwd = perm_index.indices_where_preferred(a, b);
        let bwd = perm_index.indices_where_preferred(b, a);
        let p1 = belief.query_probability(voter, &fwd);
        let p2 = belief.query_probability(voter, &bwd);

        let em_ab = if p1 > 0.0 {
            let mut post = belief.clone();
            if post.condition(voter, voter, a, b, &fwd).is_ok() {
                max_of(&win_proba(&post, perm_index, gamma, rng)) - base_max
            } else {
                0.0
            }
        } else {
            0.0
        };

        let em_ba = if p2 > 0.0 {
            let mut post = belief.clone();
            if post.condition(voter, voter, b, a, &bwd).is_ok() {
                max_of(&win_proba(&post, perm_index, gamma, rng)) - base_max
            } else {
                0.0
            }
        } else {
            0.0
        };

        let wem = round2(em_ab * p1 + em_ba * p2);
        out.push(ScoredQuery { query: q, score: wem });
    }

    out
}
