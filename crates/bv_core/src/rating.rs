//! Concrete rating matrices: one total ordering per voter, ground truth for
//! the oracle and for Monte-Carlo-sampled hypothetical worlds.

use alloc::vec::Vec;

use crate::permutation::Permutation;

/// `rows[v]` is voter `v`'s ranking, most-preferred candidate first.
#[derive(Clone, Debug)]
pub struct RatingMatrix {
    rows: Vec<Permutation>,
    m: usize,
}

impl RatingMatrix {
    /// `rows` must all have the same length `m`, each a permutation of
    /// `0..m`. Construction does not validate this; `bv_io` validates rows
    /// read from external sources before building a `RatingMatrix`.
    pub fn new(rows: Vec<Permutation>) -> Self {
        let m = rows.first().map(|r| r.len()).unwrap_or(0);
        Self { rows, m }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn m(&self) -> usize {
        self.m
    }

    #[inline]
    pub fn row(&self, v: usize) -> &Permutation {
        &self.rows[v]
    }

    #[inline]
    pub fn rows(&self) -> &[Permutation] {
        &self.rows
    }

    /// Position of candidate `c` in voter `v`'s ranking (0 = most preferred).
    #[inline]
    pub fn position_of(&self, v: usize, c: usize) -> usize {
        crate::permutation::PermutationIndex::position_of(&self.rows[v], c)
    }

    /// True iff voter `v` ranks `a` above `b`.
    #[inline]
    pub fn prefers(&self, v: usize, a: usize, b: usize) -> bool {
        self.position_of(v, a) < self.position_of(v, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_matches_position() {
        let rm = RatingMatrix::new(alloc::vec![alloc::vec![2, 0, 1]]);
        assert!(rm.prefers(0, 2, 0));
        assert!(rm.prefers(0, 0, 1));
        assert!(!rm.prefers(0, 1, 2));
    }
}
