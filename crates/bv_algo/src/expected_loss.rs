//! Monte-Carlo expected-loss estimator: the expected Borda-score gap between
//! the true winner of a sampled world and the candidate currently declared.

use bv_core::belief::Belief;
use bv_core::permutation::PermutationIndex;
use bv_core::rng::BvRng;

use crate::borda::argmax;

/// Default Monte-Carlo sample size, matching the engine's fixed-sample
/// estimator (the `epsilon`/`delta`-derived sample-size formula is recorded
/// in configuration but not used).
pub const DEFAULT_N_S: usize = 1000;

/// Expected loss of declaring the current `expected_borda` argmax as winner:
/// draw `n_s` concrete rating matrices from `belief`, and average
/// `max(local_scores) - local_scores[declared]` across samples.
pub fn expected_loss(
    belief: &Belief,
    perm_index: &PermutationIndex,
    expected_scores: &[f64],
    n_s: usize,
    rng: &mut BvRng,
) -> f64 {
    let declared = argmax(expected_scores);
    let m = perm_index.m();
    let mut total = 0.0f64;
    for _ in 0..n_s {
        let mut scores = alloc::vec![0u64; m];
        for v in 0..belief.n() {
            let row = belief.row(v);
            let p = rng.weighted_choice(row).unwrap_or(0);
            let perm = perm_index.permutation(p);
            for (pos, &c) in perm.iter().enumerate() {
                scores[c] += (m - 1 - pos) as u64;
            }
        }
        let max_score = *scores.iter().max().unwrap_or(&0) as f64;
        total += max_score - scores[declared] as f64;
    }
    total / n_s as f64
}
