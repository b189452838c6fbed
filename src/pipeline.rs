//! End-to-end runs of the two tools
//!
//! Both tools make a single pass: open the dump, read its datasets, resolve
//! and project the selected steps, then summarize or draw. Every dataset is
//! validated and projected before anything is printed or drawn, so a bad
//! time step or bad dimensions leave no partial output behind.

use crate::config::{OutputFormat, PlotConfig, ProcessConfig};
use crate::dataset::CounterTable;
use crate::errors::Result;
use crate::netcdf_io::{PerfDumpFile, SummaryWriter};
use crate::projection::{project, GridShape};
use crate::render::{render_dataset, HeatMap};
use crate::statistics::{summarize_table, to_json_string, DatasetSummary};
use crate::timesteps::resolve_timesteps;
use std::fs;
use std::path::PathBuf;

/// Projected panels of one dataset
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetPanels {
    pub name: String,
    pub panels: Vec<HeatMap>,
}

/// Summarizes the selected steps of every table.
///
/// # Errors
///
/// Fails on the first dataset whose step selection is invalid.
pub fn summarize_tables(
    tables: &[CounterTable],
    timesteps: Option<&[i64]>,
) -> Result<Vec<DatasetSummary>> {
    tables
        .iter()
        .map(|table| {
            let steps = resolve_timesteps(table.steps(), timesteps)?;
            let summaries = summarize_table(table, &steps)?;
            Ok(DatasetSummary::new(table.name(), table.ranks(), summaries))
        })
        .collect()
}

/// Projects the selected steps of every table onto `dims`.
///
/// # Errors
///
/// Fails on the first invalid step selection or shape mismatch.
pub fn project_tables(
    tables: &[CounterTable],
    dims: &GridShape,
    timesteps: Option<&[i64]>,
) -> Result<Vec<DatasetPanels>> {
    tables
        .iter()
        .map(|table| {
            let steps = resolve_timesteps(table.steps(), timesteps)?;
            dims.check_ranks(table.ranks())?;
            let panels = steps
                .iter()
                .map(|&step| {
                    let grid = project(&table.step_values(step)?, dims)?;
                    HeatMap::from_grid(step, grid)
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(DatasetPanels {
                name: table.name().to_string(),
                panels,
            })
        })
        .collect()
}

/// Reads a dump and summarizes it.
pub fn summarize_file(config: &ProcessConfig) -> Result<Vec<DatasetSummary>> {
    let file = PerfDumpFile::open(&config.source)?;
    let tables = file.read_all()?;
    if tables.is_empty() {
        log::warn!("no ranks x steps datasets in {}", config.source.display());
    }
    summarize_tables(&tables, config.timesteps.as_deref())
}

/// Runs the process tool: summarize, print, optionally save as NetCDF.
pub fn run_process(config: &ProcessConfig) -> Result<Vec<DatasetSummary>> {
    let summaries = summarize_file(config)?;

    match config.format {
        OutputFormat::Text => {
            for summary in &summaries {
                print!("{}", summary.render_text());
            }
        }
        OutputFormat::Json => println!("{}", to_json_string(&summaries)?),
    }

    if let Some(output_path) = &config.output_netcdf {
        SummaryWriter::new(&config.source, output_path).write(&summaries)?;
        println!("✅ Saved summaries to {}", output_path.display());
    }

    Ok(summaries)
}

/// Runs the plot tool: one PNG per dataset. Returns the written paths.
pub fn run_plot(config: &PlotConfig) -> Result<Vec<PathBuf>> {
    let datasets = {
        let file = PerfDumpFile::open(&config.source)?;
        let tables = file.read_all()?;
        project_tables(&tables, &config.dims, config.timesteps.as_deref())?
    };

    if datasets.is_empty() {
        log::warn!("no ranks x steps datasets in {}", config.source.display());
        return Ok(Vec::new());
    }

    fs::create_dir_all(&config.output_dir)?;

    let names: Vec<&str> = datasets.iter().map(|d| d.name.as_str()).collect();
    let paths = config.image_paths(&names);

    let mut written = Vec::with_capacity(datasets.len());
    for (dataset, path) in datasets.iter().zip(paths) {
        render_dataset(
            &path,
            &dataset.name,
            &dataset.panels,
            config.scale,
            config.panel_size,
        )?;
        println!(
            "✅ Saved heat map of {} ({} steps on {}) to {}",
            dataset.name,
            dataset.panels.len(),
            config.dims,
            path.display()
        );
        written.push(path);
    }

    Ok(written)
}
