//! Canonical pairwise queries and the asked-set tracked across a run.

use alloc::collections::BTreeSet;

/// A pairwise preference query in canonical form: `a < b`. The oracle answers
/// whether voter `v` prefers `a` to `b` or vice versa.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Query {
    pub voter: usize,
    pub a: usize,
    pub b: usize,
}

impl Query {
    /// Build the canonical form of a query over `(voter, x, y)`, swapping `x`
    /// and `y` if necessary so that `a < b`. Panics if `x == y`.
    pub fn canonical(voter: usize, x: usize, y: usize) -> Self {
        assert_ne!(x, y, "a query must compare two distinct candidates");
        if x < y {
            Query { voter, a: x, b: y }
        } else {
            Query { voter, a: y, b: x }
        }
    }
}

/// The set of canonical queries already answered this run. A `BTreeSet`
/// keeps iteration order deterministic, which matters for any diagnostics
/// that enumerate it.
#[derive(Clone, Debug, Default)]
pub struct AskedSet {
    inner: BTreeSet<Query>,
}

impl AskedSet {
    pub fn new() -> Self {
        Self {
            inner: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn contains(&self, q: &Query) -> bool {
        self.inner.contains(q)
    }

    /// Insert `q`; returns `true` if it was newly inserted.
    #[inline]
    pub fn insert(&mut self, q: Query) -> bool {
        self.inner.insert(q)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Query> {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_form_orders_candidates() {
        let q1 = Query::canonical(0, 3, 1);
        let q2 = Query::canonical(0, 1, 3);
        assert_eq!(q1, q2);
        assert_eq!(q1.a, 1);
        assert_eq!(q1.b, 3);
    }

    #[test]
    fn asked_set_rejects_duplicates() {
        let mut q = AskedSet::new();
        assert!(q.insert(Query::canonical(0, 0, 1)));
        assert!(!q.insert(Query::canonical(0, 1, 0)));
        assert_eq!(q.len(), 1);
    }
}
