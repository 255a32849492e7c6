//! crates/bv_io/src/lib.rs
//! Dataset/oracle layer: builds a `RatingMatrix` oracle and an optional
//! training matrix for belief initialization from one of three sources, and
//! a thin `Oracle` wrapper with bounds-checked pairwise answers.
//!
//! No network I/O; files are read from local disk only.

#![forbid(unsafe_code)]

use thiserror::Error;

pub mod dataset;
pub mod oracle;

pub use dataset::{load_dataset, Dataset};
pub use oracle::Oracle;

/// Unified error for bv_io (dataset loading and oracle construction).
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem error reading a dataset file.
    #[error("io/path error: {0}")]
    Path(#[from] std::io::Error),
    /// A dataset line could not be parsed as a ranking.
    #[error("parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },
    /// A configuration value rejected by `bv_core::config::Config::validate`.
    #[error("configuration error: {0}")]
    Config(#[from] bv_core::errors::ConfigError),
}

pub type IoResult<T> = Result<T, IoError>;
