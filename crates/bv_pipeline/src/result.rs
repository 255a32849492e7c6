//! The result tuple returned to the driver, and the per-step decision log
//! kept alongside it for reporting.

use bv_core::query::Query;

/// One entry in the controller's decision log: which query was asked, what
/// the oracle answered, what transitivity inferred for free, and the state
/// of the estimators right after integrating it.
#[derive(Clone, Debug)]
pub struct StepLog {
    pub query: Query,
    pub answer_a_preferred: bool,
    pub inferred_queries: Vec<Query>,
    pub expected_borda: Vec<f64>,
    pub expected_loss: Option<f64>,
    pub elapsed_seconds: f64,
}

/// `(winner, runtime_seconds, communication_cut_percent, expected_loss_series,
/// timestamp_series, query_count)`, exactly as specified for the driver.
#[derive(Clone, Debug)]
pub struct ResultTuple {
    pub winner: usize,
    pub runtime_seconds: f64,
    pub communication_cut_percent: f64,
    pub expected_loss_series: Vec<f64>,
    pub timestamp_series: Vec<f64>,
    pub query_count: usize,
}

/// Full outcome of one controller run: the result tuple plus the log that
/// produced it.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    pub result: ResultTuple,
    pub steps: Vec<StepLog>,
}
