//! The controller: the adaptive query-selection main loop. Select a query
//! via the configured heuristic, consult the oracle, integrate the answer
//! through the belief store and the transitivity engine, and repeat until a
//! necessary winner emerges or (outside Israeli mode) the expected loss
//! drops to the termination threshold.

use std::time::Instant;

use bv_algo::heuristics::select_query;
use bv_algo::{apply_answer, argmax, borda, expected_borda, expected_loss, permutation_point_table, Certificate, DominanceLists};
use bv_core::belief::Belief;
use bv_core::config::Config;
use bv_core::permutation::PermutationIndex;
use bv_core::query::AskedSet;
use bv_core::rng::BvRng;
use bv_io::{load_dataset, Dataset, Oracle};

use crate::result::{ResultTuple, RunOutcome, StepLog};
use crate::PipelineError;

/// Run the controller to completion under `config`, using `rng` for every
/// random decision (Monte-Carlo sampling and tie-breaking).
pub fn run(config: &Config, rng: &mut BvRng) -> Result<RunOutcome, PipelineError> {
    config.validate()?;
    let perm_index = PermutationIndex::new(config.m);
    let dataset = load_dataset(
        &config.dataset,
        config.n,
        config.m,
        &perm_index,
        rng,
        config.borda_missing_penalty,
    )?;
    run_with_dataset(config, dataset, rng)
}

/// The fraction of the full pairwise query budget saved by adaptive
/// selection, as a percentage. See §8 scenario 6: n=5, m=6, query_count=40
/// yields 46.67%.
pub fn communication_cut_percent(n: usize, m: usize, query_count: usize) -> f64 {
    100.0 * (1.0 - (2.0 * query_count as f64) / (n * m * (m - 1)) as f64)
}

/// Run the controller to completion against an already-built `dataset`,
/// skipping `bv_io::load_dataset`. Exposed so embedding callers (and tests)
/// can supply a hand-built oracle/belief pair directly.
pub fn run_with_dataset(
    config: &Config,
    dataset: Dataset,
    rng: &mut BvRng,
) -> Result<RunOutcome, PipelineError> {
    config.validate()?;
    let start = Instant::now();

    let perm_index = PermutationIndex::new(config.m);
    let oracle: Oracle = dataset.oracle;
    let mut belief: Belief = dataset.initial_belief;

    let table = permutation_point_table(&perm_index);
    let mut certificate = Certificate::new(config.n, config.m);
    let mut dominance = DominanceLists::new(config.n, config.m);
    let mut asked = AskedSet::new();

    let actual_borda = borda(oracle.rating());
    tracing::debug!(?actual_borda, "ground-truth Borda scores for this run");

    let mut expected_scores = expected_borda(&belief, &table);

    let mut expected_loss_series = Vec::new();
    let mut timestamp_series = vec![elapsed_seconds(start)];
    if !config.israeli {
        let loss = expected_loss(&belief, &perm_index, &expected_scores, config.n_s, rng);
        tracing::debug!(loss, "initial expected loss");
        expected_loss_series.push(loss);
    }

    let query_budget = config.n * config.m * (config.m - 1) / 2;
    let mut steps = Vec::new();
    let mut winner;

    // Do-while shape: a query is always selected and processed before the
    // first termination check, matching the controller step order (select
    // → ask → integrate → ... → terminate) rather than checking termination
    // up front. A `termination_value` at or above the pre-loop expected loss
    // must not short-circuit the run before a single query is asked.
    loop {
        let Some(scored) = select_query(config.heuristic, &belief, &perm_index, config.gamma, &asked, rng) else {
            // No unasked query remains; fall back to the current best guess.
            winner = argmax(&expected_scores);
            break;
        };

        let query = scored.query;
        if !asked.insert(query) {
            tracing::warn!(
                voter = query.voter,
                a = query.a,
                b = query.b,
                "heuristic reselected an already-asked query; skipping"
            );
            continue;
        }

        let answer = oracle.prefers(query.voter, query.a, query.b)?;

        let (preferred_a, preferred_b) = if answer {
            (query.a, query.b)
        } else {
            (query.b, query.a)
        };
        let preferred_indices = perm_index.indices_where_preferred(preferred_a, preferred_b);
        if let Err(warning) = belief.condition(query.voter, query.voter, preferred_a, preferred_b, &preferred_indices) {
            tracing::warn!(%warning, "belief conditioning warning");
        }

        let inferred = apply_answer(
            &mut dominance,
            &mut certificate,
            &mut asked,
            query.voter,
            query.a,
            query.b,
            answer,
        );

        expected_scores = expected_borda(&belief, &table);
        let loss = if config.israeli {
            None
        } else {
            let loss = expected_loss(&belief, &perm_index, &expected_scores, config.n_s, rng);
            expected_loss_series.push(loss);
            Some(loss)
        };
        let elapsed = elapsed_seconds(start);
        timestamp_series.push(elapsed);

        steps.push(StepLog {
            query,
            answer_a_preferred: answer,
            inferred_queries: inferred,
            expected_borda: expected_scores.clone(),
            expected_loss: loss,
            elapsed_seconds: elapsed,
        });

        if asked.len() > query_budget {
            return Err(PipelineError::Run(bv_core::errors::RunError::QueryBudgetExceeded {
                issued: asked.len(),
                budget: query_budget,
            }));
        }

        let necessary_winner = certificate.necessary_winner();
        let loss_stops = !config.israeli
            && expected_loss_series
                .last()
                .is_some_and(|&loss| loss <= config.termination_value);

        if necessary_winner.is_some() || loss_stops {
            winner = necessary_winner.unwrap_or_else(|| argmax(&expected_scores));
            break;
        }
    }

    let query_count = asked.len();

    Ok(RunOutcome {
        result: ResultTuple {
            winner,
            runtime_seconds: elapsed_seconds(start),
            communication_cut_percent: communication_cut_percent(config.n, config.m, query_count),
            expected_loss_series,
            timestamp_series,
            query_count,
        },
        steps,
    })
}

fn elapsed_seconds(start: Instant) -> f64 {
    start.elapsed().as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bv_core::config::{DatasetSelector, Heuristic};

    fn tiny_config(heuristic: Heuristic, israeli: bool) -> Config {
        Config {
            n: 2,
            m: 3,
            gamma: 200,
            heuristic,
            termination_value: 0.0,
            epsilon: 0.15,
            delta: 0.05,
            israeli,
            dataset: DatasetSelector::Fixed,
            seed: 42,
            n_s: 200,
            borda_missing_penalty: 2.0,
        }
    }

    #[test]
    fn terminates_and_finds_the_identity_winner_under_evoi() {
        let config = tiny_config(Heuristic::Evoi, true);
        let mut rng = BvRng::from_seed_u64(config.seed);
        let outcome = run(&config, &mut rng).unwrap();
        assert_eq!(outcome.result.winner, 0);
        assert!(outcome.result.query_count <= config.n * config.m * (config.m - 1) / 2);
    }

    #[test]
    fn terminates_under_igb_with_a_fixed_seed() {
        let config = tiny_config(Heuristic::Igb, false);
        let mut rng = BvRng::from_seed_u64(config.seed);
        let outcome = run(&config, &mut rng).unwrap();
        assert_eq!(outcome.result.winner, 0);
    }

    #[test]
    fn query_count_never_exceeds_the_full_pairwise_budget() {
        let config = tiny_config(Heuristic::Esb, false);
        let mut rng = BvRng::from_seed_u64(7);
        let outcome = run(&config, &mut rng).unwrap();
        let budget = config.n * config.m * (config.m - 1) / 2;
        assert!(outcome.result.query_count <= budget);
    }

    #[test]
    fn tied_borda_scores_still_terminate_within_budget() {
        // R = [[0,1,2],[2,1,0]]: every candidate scores 2 Borda points overall.
        use bv_core::rating::RatingMatrix;

        let config = tiny_config(Heuristic::Evoi, false);
        let perm_index = PermutationIndex::new(config.m);
        let rating = RatingMatrix::new(vec![vec![0, 1, 2], vec![2, 1, 0]]);
        assert_eq!(borda(&rating), vec![2, 2, 2]);

        let dataset = Dataset {
            oracle: Oracle::new(rating),
            initial_belief: Belief::uniform(config.n, &perm_index),
        };
        let mut rng = BvRng::from_seed_u64(config.seed);
        let outcome = run_with_dataset(&config, dataset, &mut rng).unwrap();

        assert!(outcome.result.winner < config.m);
        let budget = config.n * config.m * (config.m - 1) / 2;
        assert!(outcome.result.query_count <= budget);
    }

    #[test]
    fn communication_cut_matches_the_reference_formula() {
        // n=5, m=6, query_count=40 -> 100*(1 - 80/150) = 46.666...%
        let cut = communication_cut_percent(5, 6, 40);
        assert!((cut - 46.666_666_666_666_664).abs() < 1e-9);
    }
}
