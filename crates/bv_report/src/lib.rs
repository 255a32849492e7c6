//! bv_report — pure, offline rendering of a completed run's result tuple and
//! decision log as JSON or HTML. No filesystem or network access; callers
//! own where the rendered text is written.

#![forbid(unsafe_code)]

use thiserror::Error;

pub mod structure;

#[cfg(feature = "render_json")]
pub mod render_json;

#[cfg(feature = "render_html")]
pub mod render_html;

pub use structure::{ReportModel, StepRecord};

/// Errors a renderer can surface. Variants are feature-gated with their
/// renderer since `serde_json`/`minijinja` are both optional dependencies.
#[derive(Debug, Error)]
pub enum ReportError {
    #[cfg(feature = "render_json")]
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "render_html")]
    #[error("HTML rendering failed: {0}")]
    Html(#[from] minijinja::Error),
}
