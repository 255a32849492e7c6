//! Dataset construction: builds the oracle's ground-truth rating matrix and,
//! where applicable, a disjoint training matrix for belief initialization.

use std::fs;
use std::path::Path;

use bv_core::belief::Belief;
use bv_core::config::DatasetSelector;
use bv_core::errors::ConfigError;
use bv_core::permutation::PermutationIndex;
use bv_core::rating::RatingMatrix;
use bv_core::rng::BvRng;

use crate::oracle::Oracle;
use crate::IoError;

/// A constructed oracle plus the initial belief it should be paired with.
pub struct Dataset {
    pub oracle: Oracle,
    pub initial_belief: Belief,
}

/// The small built-in fixed matrix used by the literal test scenarios: each
/// of `n` voters ranks the `m` candidates in increasing index order. For
/// `n`/`m` beyond this minimal shape, rows repeat the identity ranking — the
/// fixed selector exists to exercise a reproducible, hand-checkable case,
/// not to model real preference diversity.
fn fixed_rating(n: usize, m: usize) -> RatingMatrix {
    let row: Vec<usize> = (0..m).collect();
    RatingMatrix::new(vec![row; n])
}

/// Build the dataset (oracle + initial belief) named by `selector`.
/// `borda_missing_penalty` only matters to the `RandomFromFile` selector: it
/// scores the (possibly `candidate_window`-truncated) training rows so a
/// truncated file's prior quality is visible in logs before a single query is
/// asked.
pub fn load_dataset(
    selector: &DatasetSelector,
    n: usize,
    m: usize,
    perm_index: &PermutationIndex,
    rng: &mut BvRng,
    borda_missing_penalty: f64,
) -> Result<Dataset, IoError> {
    match selector {
        DatasetSelector::Fixed => {
            let rating = fixed_rating(n, m);
            Ok(Dataset {
                oracle: Oracle::new(rating),
                initial_belief: Belief::uniform(n, perm_index),
            })
        }
        DatasetSelector::Random => {
            let rating = random_rating_matrix(n, m, perm_index, rng);
            Ok(Dataset {
                oracle: Oracle::new(rating),
                initial_belief: Belief::uniform(n, perm_index),
            })
        }
        DatasetSelector::RandomFromFile {
            path,
            nb_matrix,
            block_size,
            candidate_window,
        } => load_from_file(
            path,
            n,
            m,
            *nb_matrix,
            *block_size,
            *candidate_window,
            perm_index,
            borda_missing_penalty,
        ),
    }
}

fn random_rating_matrix(
    n: usize,
    m: usize,
    perm_index: &PermutationIndex,
    rng: &mut BvRng,
) -> RatingMatrix {
    let rows = (0..n)
        .map(|_| {
            let idx = rng.choose_index(perm_index.len()).unwrap_or(0);
            perm_index.permutation(idx).clone()
        })
        .collect();
    RatingMatrix::new(rows)
}

/// Parse every whitespace/comma-delimited line of `path` as a permutation of
/// candidate indices, applying `candidate_window` (keep only candidates
/// `0..window`, dropping rows that do not mention all of them) if given.
fn parse_ranking_file(path: &Path, candidate_window: Option<usize>) -> Result<Vec<Vec<usize>>, IoError> {
    let text = fs::read_to_string(path)?;
    let mut rows = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut values: Vec<usize> = Vec::new();
        for tok in trimmed.split(|c: char| c == ',' || c.is_whitespace()) {
            if tok.is_empty() {
                continue;
            }
            let v: usize = tok.parse().map_err(|_| IoError::Parse {
                line: line_no + 1,
                msg: format!("could not parse '{tok}' as a candidate index"),
            })?;
            values.push(v);
        }
        if let Some(window) = candidate_window {
            values.retain(|&c| c < window);
        }
        rows.push(values);
    }
    Ok(rows)
}

/// The original sushi-dataset loader trained its initial-belief distribution
/// on the very rows it would later use as the oracle's ground truth — a
/// self-referential quirk we deliberately do not reproduce (it would let the
/// belief "know" the answer before a single query is asked). Training rows
/// and oracle rows are taken from disjoint, non-overlapping blocks of the
/// file instead: the first `nb_matrix * block_size` rows train the belief,
/// the following `n` rows become R.
fn load_from_file(
    path: &str,
    n: usize,
    m: usize,
    nb_matrix: usize,
    block_size: usize,
    candidate_window: Option<usize>,
    perm_index: &PermutationIndex,
    borda_missing_penalty: f64,
) -> Result<Dataset, IoError> {
    let rows = parse_ranking_file(Path::new(path), candidate_window)?;
    let training_needed = nb_matrix * block_size;
    let total_needed = training_needed + n;
    if rows.len() < total_needed {
        return Err(ConfigError::NotEnoughTrainingRows {
            needed: total_needed,
            found: rows.len(),
        }
        .into());
    }

    let training_rows = rows[..training_needed].to_vec();
    let oracle_rows = rows[training_needed..training_needed + n].to_vec();

    // `candidate_window` can leave training rows shorter than `m`; score them
    // with the missing-candidate penalty so a truncated prior is visible
    // before any query is asked, even though `from_training` below silently
    // ignores rows it cannot map to a full permutation index.
    let training_borda_estimate = bv_algo::borda_with_penalty(&training_rows, m, borda_missing_penalty);
    tracing::debug!(?training_borda_estimate, "penalized Borda estimate from training rows");

    for (i, row) in oracle_rows.iter().enumerate() {
        if row.len() != m {
            return Err(IoError::Parse {
                line: training_needed + i + 1,
                msg: format!("expected a ranking of {m} candidates, found {}", row.len()),
            });
        }
    }

    let training = RatingMatrix::new(training_rows);
    let oracle_matrix = RatingMatrix::new(oracle_rows);
    let initial_belief = Belief::from_training(n, perm_index, &training);

    Ok(Dataset {
        oracle: Oracle::new(oracle_matrix),
        initial_belief,
    })
}
