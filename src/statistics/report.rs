//! Text and JSON rendering of summaries

use super::summary::StepSummary;
use serde_json::{json, Value as JsonValue};

/// All step summaries of one dataset
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub name: String,
    pub ranks: usize,
    pub steps: Vec<StepSummary>,
}

impl DatasetSummary {
    #[must_use]
    pub fn new(name: impl Into<String>, ranks: usize, steps: Vec<StepSummary>) -> Self {
        Self {
            name: name.into(),
            ranks,
            steps,
        }
    }

    /// Header, rank count and one line per step.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("\n---------metrics for {}---------\n", self.name));
        out.push_str(&format!("ranks: {}\n", self.ranks));
        for summary in &self.steps {
            out.push_str(&format_summary_line(summary));
            out.push('\n');
        }
        out
    }

    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        json!({
            "dataset": self.name,
            "ranks": self.ranks,
            "steps": self.steps.iter().map(summary_to_json).collect::<Vec<_>>(),
        })
    }
}

/// `step <i>  min:avg:max <min>:<avg>:<max> ratio(max/avg, max/min) <r1> <r2>`
#[must_use]
pub fn format_summary_line(summary: &StepSummary) -> String {
    format!(
        "step {}  min:avg:max {}:{:.2}:{} ratio(max/avg, max/min) {:.2} {:.2}",
        summary.step,
        summary.min,
        summary.average,
        summary.max,
        summary.ratio_max_avg,
        summary.ratio_max_min
    )
}

// JSON has no inf/NaN; those ratios become null.
fn finite_or_null(value: f64) -> JsonValue {
    if value.is_finite() {
        json!(value)
    } else {
        JsonValue::Null
    }
}

fn summary_to_json(summary: &StepSummary) -> JsonValue {
    json!({
        "step": summary.step,
        "count": summary.count,
        "min": summary.min,
        "avg": summary.average,
        "max": summary.max,
        "ratio_max_avg": finite_or_null(summary.ratio_max_avg),
        "ratio_max_min": finite_or_null(summary.ratio_max_min),
    })
}

/// Pretty JSON array of dataset summaries.
///
/// # Errors
///
/// Fails only if serialization itself fails.
pub fn to_json_string(summaries: &[DatasetSummary]) -> serde_json::Result<String> {
    let values: Vec<JsonValue> = summaries.iter().map(DatasetSummary::to_json).collect();
    serde_json::to_string_pretty(&values)
}
