// crates/bv_algo/src/lib.rs
#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod borda;
pub mod certificate;
pub mod expected_loss;
pub mod heuristics;
pub mod transitivity;
pub mod win_proba;

pub use borda::{argmax, argmax_u64, borda, borda_with_penalty, expected_borda, permutation_point_table};
pub use certificate::Certificate;
pub use expected_loss::{expected_loss, DEFAULT_N_S};
pub use heuristics::{select_query, ScoredQuery};
pub use transitivity::{apply_answer, DominanceLists};
pub use win_proba::win_proba;
