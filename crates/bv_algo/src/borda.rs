//! Borda scoring: concrete (from a rating matrix) and expected (from a belief).

use alloc::vec;
use alloc::vec::Vec;

use bv_core::belief::Belief;
use bv_core::permutation::PermutationIndex;
use bv_core::rating::RatingMatrix;

/// Borda score of each candidate under a concrete rating matrix: the
/// candidate at position `j` in a voter's ranking receives `m - 1 - j`
/// points; scores are summed across voters.
pub fn borda(rating: &RatingMatrix) -> Vec<u64> {
    let m = rating.m();
    let mut scores = vec![0u64; m];
    for row in rating.rows() {
        for (pos, &candidate) in row.iter().enumerate() {
            scores[candidate] += (m - 1 - pos) as u64;
        }
    }
    scores
}

/// Borda score with a penalty for missing candidates: a ranking row may be
/// shorter than `m`; present candidates score normally by position, and
/// every candidate absent from a given voter's row loses `penalty` points.
pub fn borda_with_penalty(rows: &[Vec<usize>], m: usize, penalty: f64) -> Vec<f64> {
    let mut scores = vec![0.0f64; m];
    for row in rows {
        let present: alloc::collections::BTreeSet<usize> = row.iter().copied().collect();
        for (pos, &candidate) in row.iter().enumerate() {
            scores[candidate] += (row.len() - 1 - pos) as f64;
        }
        for c in 0..m {
            if !present.contains(&c) {
                scores[c] -= penalty;
            }
        }
    }
    scores
}

/// Per-permutation point contribution table: `table[p][c]` is the Borda
/// points candidate `c` earns in permutation `p`. Precomputed once per `m`
/// so that `expected_borda` is a single weighted contraction with belief.
pub fn permutation_point_table(perm_index: &PermutationIndex) -> Vec<Vec<u64>> {
    let m = perm_index.m();
    perm_index
        .all()
        .iter()
        .map(|perm| {
            let mut points = vec![0u64; m];
            for (pos, &c) in perm.iter().enumerate() {
                points[c] = (m - 1 - pos) as u64;
            }
            points
        })
        .collect()
}

/// Expected Borda score of each candidate under `belief`: for candidate `c`,
/// `sum_v sum_p belief[v][p] * points_table[p][c]`.
pub fn expected_borda(belief: &Belief, points_table: &[Vec<u64>]) -> Vec<f64> {
    let m = points_table.first().map(|p| p.len()).unwrap_or(0);
    let mut totals = vec![0.0f64; m];
    for v in 0..belief.n() {
        let row = belief.row(v);
        for (p, &mass) in row.iter().enumerate() {
            if mass == 0.0 {
                continue;
            }
            for (c, &pts) in points_table[p].iter().enumerate() {
                totals[c] += mass * pts as f64;
            }
        }
    }
    totals
}

/// Deterministic argmax: lowest index wins ties.
pub fn argmax(scores: &[f64]) -> usize {
    let mut best_i = 0;
    let mut best_v = f64::NEG_INFINITY;
    for (i, &v) in scores.iter().enumerate() {
        if v > best_v {
            best_v = v;
            best_i = i;
        }
    }
    best_i
}

/// Deterministic argmax over integer scores: lowest index wins ties.
pub fn argmax_u64(scores: &[u64]) -> usize {
    let mut best_i = 0;
    let mut best_v = 0u64;
    for (i, &v) in scores.iter().enumerate() {
        if i == 0 || v > best_v {
            best_v = v;
            best_i = i;
        }
    }
    best_i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borda_scores_a_simple_matrix() {
        let rm = RatingMatrix::new(vec![vec![0, 1, 2], vec![0, 1, 2]]);
        assert_eq!(borda(&rm), vec![4, 2, 0]);
    }

    #[test]
    fn argmax_breaks_ties_by_lowest_index() {
        assert_eq!(argmax(&[1.0, 3.0, 3.0, 2.0]), 1);
    }

    #[test]
    fn borda_with_penalty_matches_plain_borda_on_complete_rows() {
        let rows = vec![vec![0usize, 1, 2], vec![0, 1, 2]];
        let plain = borda(&RatingMatrix::new(rows.clone()));
        let penalized = borda_with_penalty(&rows, 3, 5.0);
        for c in 0..3 {
            assert!((penalized[c] - plain[c] as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn borda_with_penalty_docks_candidates_missing_from_a_row() {
        // Candidate 2 is absent from this voter's (window-truncated) row and
        // takes the penalty; candidates 0 and 1 score normally by position.
        let rows = vec![vec![1usize, 0]];
        let scores = borda_with_penalty(&rows, 3, 4.0);
        assert_eq!(scores, vec![0.0, 1.0, -4.0]);
    }

    #[test]
    fn borda_with_penalty_sums_penalties_across_rows() {
        let rows = vec![vec![0usize], vec![1usize]];
        let scores = borda_with_penalty(&rows, 3, 1.0);
        // Row 0: candidate 0 scores 0, candidates 1 and 2 each lose 1.
        // Row 1: candidate 1 scores 0, candidates 0 and 2 each lose 1.
        assert_eq!(scores, vec![-1.0, -1.0, -2.0]);
    }

    #[test]
    fn expected_borda_matches_concrete_borda_for_a_point_mass_belief() {
        let perm_index = PermutationIndex::new(3);
        let table = permutation_point_table(&perm_index);
        let perm = vec![2usize, 0, 1];
        let idx = perm_index.index_of(&perm).unwrap();
        let mut belief = Belief::uniform(1, &perm_index);
        // Force a point mass manually by conditioning on every pairwise fact
        // implied by `perm`: 2>0, 2>1, 0>1.
        for (a, b) in [(2usize, 0usize), (2, 1), (0, 1)] {
            let fwd = perm_index.indices_where_preferred(a, b);
            belief.condition(0, 0, a, b, &fwd).unwrap();
        }
        let expected = expected_borda(&belief, &table);
        let rm = RatingMatrix::new(vec![perm]);
        let concrete = borda(&rm);
        for c in 0..3 {
            assert!((expected[c] - concrete[c] as f64).abs() < 1e-9);
        }
        let _ = idx;
    }
}
