//! Per-step load-balance summaries
//!
//! Computes min/avg/max of the per-rank counter values of one time step plus
//! the max/avg and max/min ratios used to spot load imbalance.

use crate::dataset::CounterTable;
use crate::errors::{PerfDumpError, Result};
use crate::projection::{flatten, project, GridShape};

/// Summary of one time step of one dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummary {
    /// Time step index within the dataset
    pub step: usize,
    /// Number of ranks summarized
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub average: f64,
    /// `max / average`; `inf` or `NaN` when the average is zero
    pub ratio_max_avg: f64,
    /// `max / min`; `inf` or `NaN` when the minimum is zero
    pub ratio_max_min: f64,
}

impl StepSummary {
    /// True when either ratio is infinite or NaN.
    #[must_use]
    pub fn has_degenerate_ratio(&self) -> bool {
        !self.ratio_max_avg.is_finite() || !self.ratio_max_min.is_finite()
    }
}

/// Summarizes the per-rank `values` of time step `step`.
///
/// Ratios are plain IEEE divisions: a zero average or minimum yields
/// `inf` (or `NaN` for `0 / 0`). That is logged as a warning and does not
/// abort the run.
///
/// # Errors
///
/// Returns [`PerfDumpError::StatisticsError`] for an empty vector.
pub fn summarize(step: usize, values: &[f64]) -> Result<StepSummary> {
    if values.is_empty() {
        return Err(PerfDumpError::StatisticsError(format!(
            "no rank values to summarize for step {step}"
        )));
    }

    let count = values.len();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let sum: f64 = values.iter().sum();
    let average = sum / count as f64;

    let summary = StepSummary {
        step,
        count,
        min,
        max,
        average,
        ratio_max_avg: max / average,
        ratio_max_min: max / min,
    };

    if !summary.ratio_max_avg.is_finite() {
        log::warn!("step {step}: average is zero, max/avg ratio is {}", summary.ratio_max_avg);
    }
    if !summary.ratio_max_min.is_finite() {
        log::warn!("step {step}: minimum is zero, max/min ratio is {}", summary.ratio_max_min);
    }

    Ok(summary)
}

/// Summarizes the selected `steps` of a counter table, in order.
///
/// Each column goes through the flat projection (`[ranks]`) before being
/// summarized, so the same row-major layout is used as for plotting.
///
/// # Errors
///
/// Propagates out-of-range steps and statistics errors.
pub fn summarize_table(table: &CounterTable, steps: &[usize]) -> Result<Vec<StepSummary>> {
    let shape = GridShape::flat(table.ranks());
    steps
        .iter()
        .map(|&step| {
            let column = table.step_values(step)?;
            let grid = project(&column, &shape)?;
            summarize(step, &flatten(&grid))
        })
        .collect()
}
