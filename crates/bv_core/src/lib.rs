//! bv_core — Core types for the adaptive Borda query-selection engine.
//!
//! This crate is **I/O-free**. It defines the permutation index, the belief
//! store, the rating matrix, canonical query types, the run configuration,
//! and the deterministic RNG shared by `bv_algo`, `bv_io`, `bv_pipeline`,
//! `bv_report`, and `bv_cli`.
//!
//! Serialization derives are gated behind the `serde` feature.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod rng;

pub mod errors {
    //! Structured error taxonomy for every fallible boundary in the engine.
    use core::fmt;

    /// Fatal configuration problems; the run never starts.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub enum ConfigError {
        TooFewCandidates { m: usize },
        ZeroVoters,
        UnknownHeuristic(alloc::string::String),
        UnknownDatasetSelector(alloc::string::String),
        ZeroMonteCarloSamples,
        NotEnoughTrainingRows { needed: usize, found: usize },
        MissingDatasetPath,
    }

    impl fmt::Display for ConfigError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                ConfigError::TooFewCandidates { m } => {
                    write!(f, "candidate count m={m} is below the minimum of 2")
                }
                ConfigError::ZeroVoters => write!(f, "voter count n must be positive"),
                ConfigError::UnknownHeuristic(h) => write!(f, "unknown heuristic '{h}'"),
                ConfigError::UnknownDatasetSelector(s) => {
                    write!(f, "unknown dataset selector '{s}'")
                }
                ConfigError::ZeroMonteCarloSamples => {
                    write!(f, "gamma must be positive for a Monte-Carlo-based heuristic")
                }
                ConfigError::NotEnoughTrainingRows { needed, found } => write!(
                    f,
                    "dataset supplied {found} training rows, needed at least {needed}"
                ),
                ConfigError::MissingDatasetPath => {
                    write!(f, "dataset selector requires a file path but none was given")
                }
            }
        }
    }

    /// Recoverable run-time conditions. The caller logs these and continues.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub enum RunWarning {
        /// Posterior conditioning found zero mass on the observed event.
        InconsistentEvidence { voter: usize, a: usize, b: usize },
        /// A belief row's mass drifted from 1 beyond tolerance and was renormalized.
        NumericalDrift { voter: usize, drift: f64 },
        /// The heuristic re-selected a query already in the asked-set.
        DuplicateQuery { voter: usize, a: usize, b: usize },
    }

    impl fmt::Display for RunWarning {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                RunWarning::InconsistentEvidence { voter, a, b } => write!(
                    f,
                    "voter {voter}: evidence for ({a},{b}) was inconsistent with belief; belief left unchanged"
                ),
                RunWarning::NumericalDrift { voter, drift } => write!(
                    f,
                    "voter {voter}: belief row sum drifted by {drift:e}; renormalized"
                ),
                RunWarning::DuplicateQuery { voter, a, b } => write!(
                    f,
                    "heuristic reselected already-asked query (voter {voter}, {a}, {b}); skipped"
                ),
            }
        }
    }

    /// Fatal run-time errors.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum RunError {
        OracleOutOfRange { voter: usize, a: usize, b: usize },
        QueryBudgetExceeded { issued: usize, budget: usize },
    }

    impl fmt::Display for RunError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                RunError::OracleOutOfRange { voter, a, b } => write!(
                    f,
                    "oracle query (voter {voter}, {a}, {b}) is out of range"
                ),
                RunError::QueryBudgetExceeded { issued, budget } => write!(
                    f,
                    "issued {issued} queries, exceeding the full pairwise budget of {budget}"
                ),
            }
        }
    }
}

pub mod permutation;
pub mod belief;
pub mod rating;
pub mod query;
pub mod config;

#[cfg(feature = "std")]
impl std::error::Error for errors::ConfigError {}
#[cfg(feature = "std")]
impl std::error::Error for errors::RunError {}
