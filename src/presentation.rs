use std::fmt::Write;

use comfy_table::Table;
use serde_json::json;
use size_guard_domain::Observation;
use size_guard_usecase::{CheckOutcome, CheckReport};

use crate::args::OutputFormat;
use crate::error::Result;

/// Renders the report; `failures_only` hides passing rows but keeps the totals.
///
/// # Errors
/// Serialization failures for the structured formats.
pub fn render(report: &CheckReport, format: OutputFormat, failures_only: bool) -> Result<String> {
    let visible: Vec<&CheckOutcome> =
        report.outcomes.iter().filter(|o| !failures_only || !o.passed).collect();

    match format {
        OutputFormat::Table => Ok(render_table(report, &visible)),
        OutputFormat::Json => {
            let value = json!({ "outcomes": visible, "totals": report.totals });
            Ok(serde_json::to_string_pretty(&value)?)
        }
        OutputFormat::Jsonl => render_jsonl(report, &visible),
        #[cfg(feature = "yaml")]
        OutputFormat::Yaml => {
            let value = json!({ "outcomes": visible, "totals": report.totals });
            Ok(serde_yaml::to_string(&value)?)
        }
    }
}

fn render_table(report: &CheckReport, visible: &[&CheckOutcome]) -> String {
    let mut table = Table::new();
    table.set_header(vec!["RULE", "INPUT", "SIZE", "RESULT", "DETAIL"]);
    for o in visible {
        table.add_row(vec![
            o.rule.clone(),
            o.input.clone(),
            size_cell(&o.observation),
            if o.passed { "pass" } else { "FAIL" }.to_string(),
            o.message.clone().unwrap_or_default(),
        ]);
    }

    let t = report.totals;
    let mut out = table.to_string();
    let _ = write!(out, "\n[size_guard] {} checked, {} passed, {} failed", t.checked, t.passed, t.failed);
    if t.assumed_empty > 0 {
        let _ = write!(out, " ({} assumed empty)", t.assumed_empty);
    }
    out
}

fn render_jsonl(report: &CheckReport, visible: &[&CheckOutcome]) -> Result<String> {
    let mut out = String::new();
    for o in visible {
        let mut v = serde_json::to_value(o)?;
        if let Some(obj) = v.as_object_mut() {
            obj.insert("type".to_string(), "outcome".into());
        }
        out.push_str(&serde_json::to_string(&v)?);
        out.push('\n');
    }
    let mut totals = serde_json::to_value(report.totals)?;
    if let Some(obj) = totals.as_object_mut() {
        obj.insert("type".to_string(), "totals".into());
    }
    out.push_str(&serde_json::to_string(&totals)?);
    Ok(out)
}

fn size_cell(observation: &Observation) -> String {
    match observation {
        Observation::Measured { bytes } => format!("{bytes:#}"),
        Observation::AssumedEmpty { .. } => "0 B (assumed)".to_string(),
        Observation::Unresolved { .. } => "?".to_string(),
        Observation::Unsupported { .. } => "-".to_string(),
    }
}
