//! The belief store: one probability distribution over permutation space per
//! voter, updated by posterior conditioning on observed pairwise preferences.

use alloc::vec;
use alloc::vec::Vec;

use crate::errors::RunWarning;
use crate::permutation::PermutationIndex;
use crate::rating::RatingMatrix;

/// Row-sum tolerance before a belief row is flagged for renormalization.
pub const ROW_SUM_TOLERANCE: f64 = 1e-9;

/// `rows[v][p]` is voter `v`'s probability mass on permutation `p`.
#[derive(Clone, Debug)]
pub struct Belief {
    rows: Vec<Vec<f64>>,
    n: usize,
    num_perms: usize,
}

impl Belief {
    /// Uniform belief: every voter starts with the same distribution, one
    /// over all `m!` permutations.
    pub fn uniform(n: usize, perm_index: &PermutationIndex) -> Self {
        let num_perms = perm_index.len();
        let p = 1.0 / num_perms as f64;
        Self {
            rows: vec![vec![p; num_perms]; n],
            n,
            num_perms,
        }
    }

    /// Laplace-smoothed belief trained on `training`: count how many training
    /// rows match each permutation, add one to every count, renormalize, and
    /// broadcast the resulting single distribution to all `n` voters.
    pub fn from_training(n: usize, perm_index: &PermutationIndex, training: &RatingMatrix) -> Self {
        let num_perms = perm_index.len();
        let mut counts = vec![1.0f64; num_perms]; // Laplace smoothing (+1)
        for row in training.rows() {
            if let Some(idx) = perm_index.index_of(row) {
                counts[idx] += 1.0;
            }
        }
        let total: f64 = counts.iter().sum();
        let dist: Vec<f64> = counts.into_iter().map(|c| c / total).collect();
        Self {
            rows: vec![dist; n],
            n,
            num_perms,
        }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn num_perms(&self) -> usize {
        self.num_perms
    }

    #[inline]
    pub fn row(&self, v: usize) -> &[f64] {
        &self.rows[v]
    }

    /// `P(voter v prefers a to b)` under the current belief.
    pub fn query_probability(&self, v: usize, preferred_indices: &[usize]) -> f64 {
        preferred_indices.iter().map(|&i| self.rows[v][i]).sum()
    }

    /// Condition voter `v`'s row on the event "`a` is preferred to `b`",
    /// where `preferred_indices` is `indices_where_preferred(a, b)`.
    ///
    /// Returns `Ok(())` on a normal update, or `Ok(warning)`-style recovery
    /// wrapped as `Err(RunWarning::InconsistentEvidence)` when the event has
    /// zero prior mass: the belief is left unchanged in that case, matching
    /// the engine's error-handling contract (the certificate update still
    /// proceeds independently).
    pub fn condition(
        &mut self,
        v: usize,
        voter: usize,
        a: usize,
        b: usize,
        preferred_indices: &[usize],
    ) -> Result<(), RunWarning> {
        let s: f64 = preferred_indices.iter().map(|&i| self.rows[v][i]).sum();
        if s == 0.0 {
            return Err(RunWarning::InconsistentEvidence { voter, a, b });
        }
        let row = &mut self.rows[v];
        let old = row.clone();
        for mass in row.iter_mut() {
            *mass = 0.0;
        }
        for &i in preferred_indices {
            row[i] = old[i] / s;
        }
        self.check_and_renormalize(v, voter)
    }

    /// Check row `v`'s mass sums to 1 within `ROW_SUM_TOLERANCE`; if not,
    /// renormalize in place and surface a `NumericalDrift` warning.
    fn check_and_renormalize(&mut self, v: usize, voter: usize) -> Result<(), RunWarning> {
        let sum: f64 = self.rows[v].iter().sum();
        let drift = (sum - 1.0).abs();
        if drift > ROW_SUM_TOLERANCE {
            if sum > 0.0 {
                for mass in self.rows[v].iter_mut() {
                    *mass /= sum;
                }
            }
            return Err(RunWarning::NumericalDrift { voter, drift });
        }
        Ok(())
    }
}
