//! Pretty-printed, stable-field-order JSON rendering of a `ReportModel`.

use serde_json;

use crate::structure::ReportModel;
use crate::ReportError;

/// Render `model` as pretty-printed JSON.
pub fn render(model: &ReportModel) -> Result<String, ReportError> {
    serde_json::to_string_pretty(model).map_err(ReportError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bv_pipeline::{ResultTuple, RunOutcome};

    #[test]
    fn renders_valid_json_with_expected_top_level_fields() {
        let outcome = RunOutcome {
            result: ResultTuple {
                winner: 0,
                runtime_seconds: 0.01,
                communication_cut_percent: 50.0,
                expected_loss_series: vec![1.0],
                timestamp_series: vec![0.0],
                query_count: 1,
            },
            steps: vec![],
        };
        let model = ReportModel::from(&outcome);
        let text = render(&model).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_json_diff::assert_json_include!(
            actual: parsed,
            expected: serde_json::json!({
                "winner": 0,
                "query_count": 1,
                "steps": [],
            })
        );
    }
}
