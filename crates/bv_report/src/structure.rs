//! Serializable mirror of a `bv_pipeline::RunOutcome`. `bv_pipeline` itself
//! carries no serde dependency, so the report model copies its fields into a
//! plain record and derives `Serialize` here instead.

use bv_pipeline::{RunOutcome, StepLog};

#[cfg(any(feature = "render_json", feature = "render_html"))]
use serde::Serialize;

/// One answered query, mirroring `bv_pipeline::StepLog` with a flat,
/// stable field order for external consumers.
#[derive(Clone, Debug)]
#[cfg_attr(any(feature = "render_json", feature = "render_html"), derive(Serialize))]
pub struct StepRecord {
    pub voter: usize,
    pub a: usize,
    pub b: usize,
    pub a_preferred: bool,
    pub inferred_count: usize,
    pub expected_borda: Vec<f64>,
    pub expected_loss: Option<f64>,
    pub elapsed_seconds: f64,
}

impl From<&StepLog> for StepRecord {
    fn from(step: &StepLog) -> Self {
        StepRecord {
            voter: step.query.voter,
            a: step.query.a,
            b: step.query.b,
            a_preferred: step.answer_a_preferred,
            inferred_count: step.inferred_queries.len(),
            expected_borda: step.expected_borda.clone(),
            expected_loss: step.expected_loss,
            elapsed_seconds: step.elapsed_seconds,
        }
    }
}

/// The full report: the result tuple plus the per-step decision log, ready
/// to render as JSON or HTML.
#[derive(Clone, Debug)]
#[cfg_attr(any(feature = "render_json", feature = "render_html"), derive(Serialize))]
pub struct ReportModel {
    pub winner: usize,
    pub runtime_seconds: f64,
    pub communication_cut_percent: f64,
    pub query_count: usize,
    pub expected_loss_series: Vec<f64>,
    pub timestamp_series: Vec<f64>,
    pub steps: Vec<StepRecord>,
}

impl From<&RunOutcome> for ReportModel {
    fn from(outcome: &RunOutcome) -> Self {
        ReportModel {
            winner: outcome.result.winner,
            runtime_seconds: outcome.result.runtime_seconds,
            communication_cut_percent: outcome.result.communication_cut_percent,
            query_count: outcome.result.query_count,
            expected_loss_series: outcome.result.expected_loss_series.clone(),
            timestamp_series: outcome.result.timestamp_series.clone(),
            steps: outcome.steps.iter().map(StepRecord::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bv_core::query::Query;

    #[test]
    fn report_model_mirrors_the_result_tuple() {
        let outcome = RunOutcome {
            result: bv_pipeline::ResultTuple {
                winner: 2,
                runtime_seconds: 0.5,
                communication_cut_percent: 46.67,
                expected_loss_series: vec![1.0, 0.5],
                timestamp_series: vec![0.0, 0.1],
                query_count: 40,
            },
            steps: vec![StepLog {
                query: Query::canonical(0, 1, 3),
                answer_a_preferred: true,
                inferred_queries: vec![],
                expected_borda: vec![1.0, 2.0, 3.0],
                expected_loss: Some(0.5),
                elapsed_seconds: 0.1,
            }],
        };

        let model = ReportModel::from(&outcome);
        assert_eq!(model.winner, 2);
        assert_eq!(model.query_count, 40);
        assert_eq!(model.steps.len(), 1);
        assert_eq!(model.steps[0].a, 1);
        assert_eq!(model.steps[0].b, 3);
    }
}
