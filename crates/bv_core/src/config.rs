//! Run configuration: a single explicit, validated record. Never read from
//! module-level mutable state — constructed once and passed by reference.

use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Heuristic strategy for selecting the next pairwise query.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Heuristic {
    /// Information Gain for Borda: entropy reduction on the win-probability distribution.
    Igb,
    /// Expected Score for Borda: change in the max of the win-probability distribution.
    Esb,
    /// Expected Value of Information, closed-form over permutations (no Monte Carlo).
    Evoi,
    /// EVOI, falling back to IGB when the EVOI-selected value is exactly zero.
    EvoiIgb,
}

impl Heuristic {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s {
            "IGB" | "igb" => Ok(Heuristic::Igb),
            "ESB" | "esb" => Ok(Heuristic::Esb),
            "EVOI" | "evoi" => Ok(Heuristic::Evoi),
            "EVOI+IGB" | "evoi+igb" | "evoi_igb" => Ok(Heuristic::EvoiIgb),
            other => Err(ConfigError::UnknownHeuristic(String::from(other))),
        }
    }

    /// A Monte-Carlo win-probability estimate is needed by IGB, ESB, and by
    /// the IGB fallback of EVOI+IGB.
    pub fn needs_monte_carlo(&self) -> bool {
        matches!(self, Heuristic::Igb | Heuristic::Esb | Heuristic::EvoiIgb)
    }
}

/// Where the rating matrix (and, where applicable, the training rows used to
/// seed the initial belief) comes from.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", tag = "kind"))]
pub enum DatasetSelector {
    /// A small built-in rating matrix with a uniform initial belief.
    Fixed,
    /// Rankings read from a delimited file; `path` holds the rows, the first
    /// block trains the initial belief and the next `n` rows become the
    /// oracle's rating matrix.
    RandomFromFile {
        path: String,
        /// Number of blocks of `block_size` training rows to draw.
        nb_matrix: usize,
        /// Rows per training block.
        block_size: usize,
        /// Keep only candidates `0..candidate_window` from each row (the
        /// original sushi dataset's "compare to the Israeli paper" filter).
        candidate_window: Option<usize>,
    },
    /// Uniformly random permutations, drawn from the run's seeded RNG.
    Random,
}

impl DatasetSelector {
    pub fn parse(kind: &str, path: Option<String>) -> Result<Self, ConfigError> {
        match kind {
            "fixed" => Ok(DatasetSelector::Fixed),
            "random_from_file" => Ok(DatasetSelector::RandomFromFile {
                path: path.ok_or(ConfigError::MissingDatasetPath)?,
                nb_matrix: 10,
                block_size: 10,
                candidate_window: None,
            }),
            "random" => Ok(DatasetSelector::Random),
            other => Err(ConfigError::UnknownDatasetSelector(String::from(other))),
        }
    }
}

/// The full, validated configuration for one controller run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Number of voters.
    pub n: usize,
    /// Number of candidates.
    pub m: usize,
    /// Monte-Carlo sample size for the winning-probability estimator.
    pub gamma: usize,
    pub heuristic: Heuristic,
    /// Expected-loss termination threshold.
    pub termination_value: f64,
    /// Recorded but unused by the fixed-sample-size expected-loss estimator.
    pub epsilon: f64,
    pub delta: f64,
    /// If true, terminate solely on necessary-winner detection.
    pub israeli: bool,
    pub dataset: DatasetSelector,
    /// RNG seed governing Monte-Carlo sampling and tie-breaking.
    pub seed: u64,
    /// Sample count for the expected-loss estimator.
    pub n_s: usize,
    /// Per-missing-candidate penalty for `borda_with_penalty`.
    pub borda_missing_penalty: f64,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.m < 2 {
            return Err(ConfigError::TooFewCandidates { m: self.m });
        }
        if self.n == 0 {
            return Err(ConfigError::ZeroVoters);
        }
        if self.gamma == 0 && self.heuristic.needs_monte_carlo() {
            return Err(ConfigError::ZeroMonteCarloSamples);
        }
        if let DatasetSelector::RandomFromFile { block_size, nb_matrix, .. } = &self.dataset {
            let needed = block_size * nb_matrix;
            if needed == 0 {
                return Err(ConfigError::NotEnoughTrainingRows { needed, found: 0 });
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n: 5,
            m: 6,
            gamma: 300,
            heuristic: Heuristic::Evoi,
            termination_value: 0.0,
            epsilon: 0.15,
            delta: 0.05,
            israeli: false,
            dataset: DatasetSelector::Fixed,
            seed: 0,
            n_s: 1000,
            borda_missing_penalty: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_too_few_candidates() {
        let mut cfg = Config::default();
        cfg.m = 1;
        assert_eq!(cfg.validate(), Err(ConfigError::TooFewCandidates { m: 1 }));
    }

    #[test]
    fn rejects_zero_voters() {
        let mut cfg = Config::default();
        cfg.n = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroVoters));
    }

    #[test]
    fn rejects_zero_gamma_for_monte_carlo_heuristics() {
        let mut cfg = Config::default();
        cfg.heuristic = Heuristic::Igb;
        cfg.gamma = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroMonteCarloSamples));
        cfg.heuristic = Heuristic::Evoi;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn heuristic_parse_accepts_known_tokens() {
        assert_eq!(Heuristic::parse("EVOI+IGB").unwrap(), Heuristic::EvoiIgb);
        assert!(Heuristic::parse("bogus").is_err());
    }
}
