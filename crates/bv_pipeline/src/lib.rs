// crates/bv_pipeline/src/lib.rs
#![forbid(unsafe_code)]

use thiserror::Error;

pub mod controller;
pub mod result;

pub use controller::{communication_cut_percent, run, run_with_dataset};
pub use result::{ResultTuple, RunOutcome, StepLog};

/// Every fallible outcome the controller can surface to its caller.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(#[from] bv_core::errors::ConfigError),
    #[error("dataset error: {0}")]
    Io(#[from] bv_io::IoError),
    #[error("run error: {0}")]
    Run(#[from] bv_core::errors::RunError),
}
