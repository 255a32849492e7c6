//! A small, self-contained HTML report. The template is inlined rather than
//! loaded from disk — the rendered document has no external asset
//! dependencies.

use minijinja::{context, Environment};

use crate::structure::ReportModel;
use crate::ReportError;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Borda run report</title>
</head>
<body>
<h1>Borda run report</h1>
<ul>
  <li>Winner: candidate {{ model.winner }}</li>
  <li>Runtime: {{ model.runtime_seconds }} s</li>
  <li>Communication cut: {{ model.communication_cut_percent }}%</li>
  <li>Queries asked: {{ model.query_count }}</li>
</ul>
<h2>Decision log</h2>
<table border="1" cellpadding="4">
<tr><th>#</th><th>voter</th><th>a</th><th>b</th><th>answer</th><th>expected loss</th></tr>
{% for step in model.steps %}
<tr>
  <td>{{ loop.index }}</td>
  <td>{{ step.voter }}</td>
  <td>{{ step.a }}</td>
  <td>{{ step.b }}</td>
  <td>{% if step.a_preferred %}a &gt; b{% else %}b &gt; a{% endif %}</td>
  <td>{{ step.expected_loss }}</td>
</tr>
{% endfor %}
</table>
</body>
</html>
"#;

/// Render `model` as a single self-contained HTML document.
pub fn render(model: &ReportModel) -> Result<String, ReportError> {
    let mut env = Environment::new();
    env.add_template("report", TEMPLATE)?;
    let tmpl = env.get_template("report")?;
    let html = tmpl.render(context! { model => model })?;
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bv_pipeline::{ResultTuple, RunOutcome};

    #[test]
    fn renders_the_winner_and_query_count() {
        let outcome = RunOutcome {
            result: ResultTuple {
                winner: 3,
                runtime_seconds: 0.02,
                communication_cut_percent: 46.67,
                expected_loss_series: vec![1.0, 0.1],
                timestamp_series: vec![0.0, 0.2],
                query_count: 40,
            },
            steps: vec![],
        };
        let model = ReportModel::from(&outcome);
        let html = render(&model).unwrap();
        assert!(html.contains("candidate 3"));
        assert!(html.contains("40"));
    }
}
