//! Per-step statistics over counter tables
//!
//! # Organization
//!
//! - [`summary`]: min/avg/max and imbalance ratios for one time step
//! - [`report`]: text and JSON rendering of the summaries

pub mod report;
pub mod summary;

pub use report::{format_summary_line, to_json_string, DatasetSummary};
pub use summary::{summarize, summarize_table, StepSummary};
