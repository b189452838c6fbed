//! Defines command-line interface options using `clap` for the two tools.

use crate::projection::GridShape;
use crate::render::ColorScale;
use clap::Parser;
use std::path::PathBuf;

/// Print per-step min/avg/max and imbalance ratios of a perf-dump file
#[derive(Parser, Debug)]
#[command(
    name = "pdump-process",
    version,
    about = "Summarize perf-dump counter files per time step"
)]
pub struct ProcessArgs {
    /// File containing performance data
    pub source_file: PathBuf,

    /// Time steps to process, e.g. 0 1 2 3 or 0 2 4. By default all steps are processed
    #[arg(short, long, num_args = 1.., allow_negative_numbers = true)]
    pub timesteps: Option<Vec<i64>>,

    /// Print the summaries as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Path to save the summaries as NetCDF
    #[arg(long)]
    pub output_netcdf: Option<PathBuf>,

    /// Only list the datasets in the file and their shapes
    #[arg(long)]
    pub list: bool,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Render heat maps of selected time steps of a perf-dump file
#[derive(Parser, Debug)]
#[command(
    name = "pdump-plot",
    version,
    about = "Plot perf-dump counter files as heat maps on a process grid"
)]
pub struct PlotArgs {
    /// File containing performance data
    pub source_file: PathBuf,

    /// Dimensions to project each step onto, separated by x's, e.g. 8x32
    #[arg(value_parser = parse_dims_arg)]
    pub dims: GridShape,

    /// Time steps to plot, e.g. 0 1 2 3 or 0 2 4. By default all steps are rendered
    #[arg(short, long, num_args = 1.., allow_negative_numbers = true)]
    pub timesteps: Option<Vec<i64>>,

    /// Directory the images are written to, one <dataset>.png per dataset
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Color range: shared across the selected steps, or per step
    #[arg(long, value_enum, default_value_t = ColorScale::Global)]
    pub scale: ColorScale,

    /// Width of each panel in pixels
    #[arg(long, default_value_t = 400)]
    pub width: u32,

    /// Height of each panel in pixels
    #[arg(long, default_value_t = 400)]
    pub height: u32,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

fn parse_dims_arg(s: &str) -> Result<GridShape, String> {
    let shape = GridShape::parse(s).map_err(|e| e.to_string())?;
    if shape.ndim() > 2 {
        return Err(format!(
            "Invalid format: heat maps take at most two dimensions, got '{}'",
            s
        ));
    }
    Ok(shape)
}

