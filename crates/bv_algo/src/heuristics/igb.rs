//! Information Gain for Borda (IGB): scores each query by how much it is
//! expected to reduce the entropy of the winning-probability distribution.

use alloc::vec::Vec;

use bv_core::belief::Belief;
use bv_core::permutation::PermutationIndex;
use bv_core::query::AskedSet;
use bv_core::rng::BvRng;

use super::{unasked_pairs, ScoredQuery};
use crate::win_proba::win_proba;

fn entropy(p: &[f64]) -> f64 {
    p.iter()
        .filter(|&&x| x > 0.0)
        .map(|&x| -x * x.log2())
        .sum()
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Weighted information gain for every unasked canonical query.
pub fn score_all(
    belief: &Belief,
    perm_index: &PermutationIndex,
    gamma: usize,
    asked: &AskedSet,
    rng: &mut BvRng,
) -> Vec<ScoredQuery> {
    let base_entropy = entropy(&win_proba(belief, perm_index, gamma, rng));
    let mut out = Vec::new();

    for q in unasked_pairs(belief.n(), perm_index.m(), asked) {
        let (voter, a, b) = (q.voter, q.a, q.b);
        let fwd = perm_index.indices_where_preferred(a, b);
        let bwd = perm_index.indices_where_preferred(b, a);
        let p1 = belief.query_probability(voter, &fwd);
        let p2 = belief.query_probability(voter, &bwd);

        let ig_ab = if p1 > 0.0 {
            let mut post = belief.clone();
            if post.condition(voter, voter, a, b, &fwd).is_ok() {
                base_entropy - entropy(&win_proba(&post, perm_index, gamma, rng))
            } else {
                0.0
            }
        } else {
            0.0
        };

        let ig_ba = if p2 > 0.0 {
            let mut post = belief.clone();
            if post.condition(voter, voter, b, a, &bwd).is_ok() {
                base_entropy - entropy(&win_proba(&post, perm_index, gamma, rng))
            } else {
                0.0
            }
        } else {
            0.0
        };

        let wig = round2(ig_ab * p1 + ig_ba * p2);
        out.push(ScoredQuery { query: q, score: wig });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_belief_yields_nonnegative_scores() {
        let perm_index = PermutationIndex::new(3);
        let belief = Belief::uniform(2, &perm_index);
        let asked = AskedSet::new();
        let mut rng = BvRng::from_seed_u64(10);
        let scored = score_all(&belief, &perm_index, 200, &asked, &mut rng);
        assert_eq!(scored.len(), 2 * 3); // n * C(m,2)
        for s in &scored {
            assert!(s.score >= -1e-9);
        }
    }

    #[test]
    fn a_settled_pair_is_excluded_once_asked() {
        use bv_core::query::Query;
        let perm_index = PermutationIndex::new(3);
        let belief = Belief::uniform(1, &perm_index);
        let mut asked = AskedSet::new();
        asked.insert(Query::canonical(0, 0, 1));
        let mut rng = BvRng::from_seed_u64(1);
        let scored = score_all(&belief, &perm_index, 100, &asked, &mut rng);
        assert!(!scored.iter().any(|s| s.query == Query::canonical(0, 0, 1)));
    }
}
