//! The oracle: a bounds-checked lookup into a ground-truth rating matrix.

use bv_core::errors::RunError;
use bv_core::rating::RatingMatrix;

/// Wraps a `RatingMatrix` R and answers `prefers(v, a, b)` — true iff voter
/// `v` ranks `a` strictly above `b` in R. Deterministic, total over valid
/// indices, O(m) per call.
#[derive(Clone, Debug)]
pub struct Oracle {
    rating: RatingMatrix,
}

impl Oracle {
    pub fn new(rating: RatingMatrix) -> Self {
        Self { rating }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.rating.n()
    }

    #[inline]
    pub fn m(&self) -> usize {
        self.rating.m()
    }

    pub fn rating(&self) -> &RatingMatrix {
        &self.rating
    }

    /// Answers whether voter `v` prefers `a` to `b`. Fails with
    /// `OracleOutOfRange` if any index is out of bounds.
    pub fn prefers(&self, v: usize, a: usize, b: usize) -> Result<bool, RunError> {
        if v >= self.rating.n() || a >= self.rating.m() || b >= self.rating.m() {
            return Err(RunError::OracleOutOfRange { voter: v, a, b });
        }
        Ok(self.rating.prefers(v, a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_matches_ranking_position() {
        let oracle = Oracle::new(RatingMatrix::new(vec![vec![2, 0, 1]]));
        assert_eq!(oracle.prefers(0, 2, 0).unwrap(), true);
        assert_eq!(oracle.prefers(0, 0, 1).unwrap(), true);
        assert_eq!(oracle.prefers(0, 1, 2).unwrap(), false);
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let oracle = Oracle::new(RatingMatrix::new(vec![vec![0, 1, 2]]));
        assert_eq!(
            oracle.prefers(0, 0, 5).unwrap_err(),
            RunError::OracleOutOfRange { voter: 0, a: 0, b: 5 }
        );
        assert_eq!(
            oracle.prefers(3, 0, 1).unwrap_err(),
            RunError::OracleOutOfRange { voter: 3, a: 0, b: 1 }
        );
    }
}
