//! Heuristic evaluators: each scores every unasked canonical query and the
//! controller asks whichever one scores highest, ties broken uniformly at
//! random. All four heuristics named in configuration are implemented here;
//! `select_query` is the single entry point the pipeline crate calls.

#[cfg(feature = "heuristic_igb")]
pub mod igb;

#[cfg(feature = "heuristic_esb")]
pub mod esb;

#[cfg(feature = "heuristic_evoi")]
pub mod evoi;

use alloc::vec::Vec;

use bv_core::belief::Belief;
use bv_core::config::Heuristic;
use bv_core::permutation::PermutationIndex;
use bv_core::query::{AskedSet, Query};
use bv_core::rng::BvRng;

/// A scored candidate query. `score`'s meaning (WIG/WEM/EVOI) depends on
/// which heuristic produced it; callers only ever compare scores produced by
/// the same heuristic in a single selection round.
#[derive(Clone, Copy, Debug)]
pub struct ScoredQuery {
    pub query: Query,
    pub score: f64,
}

/// Enumerate every canonical `(voter, a, b)` with `a < b` not already in
/// `asked`. This is the candidate pool every heuristic scores.
pub fn unasked_pairs(n: usize, m: usize, asked: &AskedSet) -> Vec<Query> {
    let mut out = Vec::new();
    for voter in 0..n {
        for a in 0..m {
            for b in (a + 1)..m {
                let q = Query::canonical(voter, a, b);
                if !asked.contains(&q) {
                    out.push(q);
                }
            }
        }
    }
    out
}

/// Pick the highest-scoring query, breaking ties uniformly at random via
/// `rng`. Returns `None` if `scored` is empty.
pub fn pick_best(scored: &[ScoredQuery], rng: &mut BvRng) -> Option<ScoredQuery> {
    if scored.is_empty() {
        return None;
    }
    let scores: Vec<f64> = scored.iter().map(|s| s.score).collect();
    let idx = rng.choose_among_maxima(&scores, 0.0)?;
    Some(scored[idx])
}

/// Dispatch to the configured heuristic, returning the query to ask next and
/// the heuristic's own score for it (for diagnostics/reporting). `EvoiIgb`
/// falls back to IGB when EVOI's winning query scores exactly zero (no
/// permutation-space progress can be read off the expected-Borda signal
/// alone, so the information-gain signal is used instead).
#[allow(unused_variables)]
pub fn select_query(
    heuristic: Heuristic,
    belief: &Belief,
    perm_index: &PermutationIndex,
    gamma: usize,
    asked: &AskedSet,
    rng: &mut BvRng,
) -> Option<ScoredQuery> {
    match heuristic {
        #[cfg(feature = "heuristic_igb")]
        Heuristic::Igb => {
            let scored = igb::score_all(belief, perm_index, gamma, asked, rng);
            pick_best(&scored, rng)
        }
        #[cfg(feature = "heuristic_esb")]
        Heuristic::Esb => {
            let scored = esb::score_all(belief, perm_index, gamma, asked, rng);
            pick_best(&scored, rng)
        }
        #[cfg(feature = "heuristic_evoi")]
        Heuristic::Evoi => {
            let scored = evoi::score_all(belief, perm_index, asked);
            pick_best(&scored, rng)
        }
        #[cfg(all(feature = "heuristic_evoi", feature = "heuristic_igb"))]
        Heuristic::EvoiIgb => {
            let scored = evoi::score_all(belief, perm_index, asked);
            let best = pick_best(&scored, rng);
            match best {
                Some(sq) if sq.score != 0.0 => Some(sq),
                _ => {
                    let igb_scored = igb::score_all(belief, perm_index, gamma, asked, rng);
                    pick_best(&igb_scored, rng)
                }
            }
        }
        #[allow(unreachable_patterns)]
        _ => None,
    }
}
