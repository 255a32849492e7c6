//! Monte-Carlo winning-probability estimator.

use alloc::vec;
use alloc::vec::Vec;

use bv_core::belief::Belief;
use bv_core::permutation::PermutationIndex;
use bv_core::rng::BvRng;

use crate::borda::argmax_u64;

/// Empirical distribution over candidates being the Borda winner, estimated
/// by drawing `gamma` concrete rating matrices from `belief` (one permutation
/// per voter, each independently sampled from that voter's row) and taking
/// the argmax-Borda winner of each sample (ties broken by lowest index).
pub fn win_proba(belief: &Belief, perm_index: &PermutationIndex, gamma: usize, rng: &mut BvRng) -> Vec<f64> {
    let m = perm_index.m();
    let mut wins = vec![0u64; m];
    for _ in 0..gamma {
        let winner = sample_one_winner(belief, perm_index, rng);
        wins[winner] += 1;
    }
    wins.into_iter().map(|w| w as f64 / gamma as f64).collect()
}

/// Draw one hypothetical rating matrix from `belief` and return its
/// Borda winner (lowest index on ties).
fn sample_one_winner(belief: &Belief, perm_index: &PermutationIndex, rng: &mut BvRng) -> usize {
    let m = perm_index.m();
    let mut scores = vec![0u64; m];
    for v in 0..belief.n() {
        let row = belief.row(v);
        let p = rng.weighted_choice(row).unwrap_or(0);
        let perm = perm_index.permutation(p);
        for (pos, &c) in perm.iter().enumerate() {
            scores[c] += (m - 1 - pos) as u64;
        }
    }
    argmax_u64(&scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_proba_rows_sum_to_one_for_finite_gamma() {
        let perm_index = PermutationIndex::new(3);
        let belief = Belief::uniform(2, &perm_index);
        let mut rng = BvRng::from_seed_u64(1);
        let dist = win_proba(&belief, &perm_index, 300, &mut rng);
        let s: f64 = dist.iter().sum();
        assert!((s - 1.0).abs() < 1e-12);
    }

    #[test]
    fn win_proba_is_deterministic_for_a_fixed_seed() {
        let perm_index = PermutationIndex::new(3);
        let belief = Belief::uniform(2, &perm_index);
        let mut rng_a = BvRng::from_seed_u64(42);
        let mut rng_b = BvRng::from_seed_u64(42);
        let a = win_proba(&belief, &perm_index, 200, &mut rng_a);
        let b = win_proba(&belief, &perm_index, 200, &mut rng_b);
        assert_eq!(a, b);
    }
}
