//! Deterministic, offline CLI argument parsing: flags map directly onto
//! `bv_core::config::Config` fields, validated once before the controller runs.

use std::path::PathBuf;

use clap::Parser;

use bv_core::config::{Config, DatasetSelector, Heuristic};
use bv_core::errors::ConfigError;

#[derive(Debug, Parser)]
#[command(name = "bv", about = "Adaptive query-selection engine for Borda voting")]
pub struct Args {
    /// Number of voters.
    #[arg(long, default_value_t = 5)]
    pub n: usize,
    /// Number of candidates.
    #[arg(long, default_value_t = 6)]
    pub m: usize,
    /// Monte-Carlo sample size for the winning-probability estimator.
    #[arg(long, default_value_t = 300)]
    pub gamma: usize,
    /// Query-selection heuristic: igb, esb, evoi, or evoi+igb.
    #[arg(long, default_value = "evoi")]
    pub heuristic: String,
    /// Expected-loss termination threshold.
    #[arg(long, default_value_t = 0.0)]
    pub termination_value: f64,
    #[arg(long, default_value_t = 0.15)]
    pub epsilon: f64,
    #[arg(long, default_value_t = 0.05)]
    pub delta: f64,
    /// Terminate solely on necessary-winner detection, skipping expected-loss tracking.
    #[arg(long)]
    pub israeli: bool,
    /// Dataset selector: fixed, random, or random_from_file.
    #[arg(long, default_value = "fixed")]
    pub dataset: String,
    /// Ranking file path, required when --dataset=random_from_file.
    #[arg(long)]
    pub dataset_path: Option<PathBuf>,
    /// Number of training blocks to draw from the dataset file.
    #[arg(long, default_value_t = 10)]
    pub nb_matrix: usize,
    /// Rows per training block.
    #[arg(long, default_value_t = 10)]
    pub block_size: usize,
    /// Keep only candidates 0..window from each dataset row.
    #[arg(long)]
    pub candidate_window: Option<usize>,
    /// RNG seed governing Monte-Carlo sampling and tie-breaking.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Sample count for the expected-loss estimator.
    #[arg(long, default_value_t = 1000)]
    pub n_s: usize,
    /// Per-missing-candidate penalty for the padded Borda score.
    #[arg(long, default_value_t = 2.0)]
    pub borda_missing_penalty: f64,
    /// Render format: json (default) or summary.
    #[arg(long, default_value = "json")]
    pub render: String,
    #[arg(long)]
    pub quiet: bool,
}

impl Args {
    /// Build and validate a `Config` from the parsed flags.
    pub fn to_config(&self) -> Result<Config, ConfigError> {
        let heuristic = Heuristic::parse(&self.heuristic)?;
        let dataset = match self.dataset.as_str() {
            "fixed" => DatasetSelector::Fixed,
            "random" => DatasetSelector::Random,
            "random_from_file" => DatasetSelector::RandomFromFile {
                path: self
                    .dataset_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .ok_or(ConfigError::MissingDatasetPath)?,
                nb_matrix: self.nb_matrix,
                block_size: self.block_size,
                candidate_window: self.candidate_window,
            },
            other => return Err(ConfigError::UnknownDatasetSelector(other.to_string())),
        };

        let config = Config {
            n: self.n,
            m: self.m,
            gamma: self.gamma,
            heuristic,
            termination_value: self.termination_value,
            epsilon: self.epsilon,
            delta: self.delta,
            israeli: self.israeli,
            dataset,
            seed: self.seed,
            n_s: self.n_s,
            borda_missing_penalty: self.borda_missing_penalty,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            n: 5,
            m: 6,
            gamma: 300,
            heuristic: "evoi".to_string(),
            termination_value: 0.0,
            epsilon: 0.15,
            delta: 0.05,
            israeli: false,
            dataset: "fixed".to_string(),
            dataset_path: None,
            nb_matrix: 10,
            block_size: 10,
            candidate_window: None,
            seed: 0,
            n_s: 1000,
            borda_missing_penalty: 2.0,
            render: "json".to_string(),
            quiet: false,
        }
    }

    #[test]
    fn builds_a_valid_default_config() {
        let args = base_args();
        assert!(args.to_config().is_ok());
    }

    #[test]
    fn rejects_an_unknown_heuristic() {
        let mut args = base_args();
        args.heuristic = "bogus".to_string();
        assert!(matches!(args.to_config(), Err(ConfigError::UnknownHeuristic(_))));
    }

    #[test]
    fn random_from_file_without_a_path_is_a_config_error() {
        let mut args = base_args();
        args.dataset = "random_from_file".to_string();
        assert!(matches!(args.to_config(), Err(ConfigError::MissingDatasetPath)));
    }
}
