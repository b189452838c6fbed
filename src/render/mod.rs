//! Heat map rendering of projected counter grids
//!
//! Each dataset becomes one PNG: a row of panels, one per selected time
//! step, titled with the dataset name.
//!
//! - [`heatmap`]: the panel data and coordinate lookup
//! - [`colormap`]: color ranges and the color ramp

pub mod colormap;
pub mod heatmap;

pub use colormap::{blues, panel_ranges, ColorRange, ColorScale};
pub use heatmap::{CellValue, HeatMap};

use crate::errors::{PerfDumpError, Result};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use std::path::Path;

const TITLE_HEIGHT: u32 = 40;

/// Pixel size of one panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSize {
    pub width: u32,
    pub height: u32,
}

impl Default for PanelSize {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
        }
    }
}

fn render_err<E: std::fmt::Display>(error: E) -> PerfDumpError {
    PerfDumpError::RenderError(error.to_string())
}

/// Most tick labels drawn along one panel axis.
pub const MAX_AXIS_LABELS: usize = 16;

/// Panel axis for `cells` cells. Cell `i` spans `i - 0.5 .. i + 0.5`, so
/// integer ticks fall on cell centers.
#[must_use]
pub fn cell_axis(cells: usize) -> RangedCoordf64 {
    (-0.5..cells as f64 - 0.5).into()
}

/// Tick count hint for an axis of `cells` cells. Never more than one tick
/// per cell, which keeps every tick on an integer position.
#[must_use]
pub fn axis_label_count(cells: usize) -> usize {
    cells.clamp(1, MAX_AXIS_LABELS)
}

/// Label of a tick at `position`: the cell index, or nothing between cells.
#[must_use]
pub fn cell_label(position: f64) -> String {
    let index = position.round();
    if (position - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    format!("{}", index as usize)
}

/// Pixel size of the whole image for `panels` panels of `size`.
///
/// # Errors
///
/// Returns [`PerfDumpError::RenderError`] when the image does not fit in
/// `u32` pixels.
pub fn canvas_size(size: PanelSize, panels: usize) -> Result<(u32, u32)> {
    let too_large = || {
        PerfDumpError::RenderError(format!(
            "image of {} panels at {}x{} pixels is too large",
            panels, size.width, size.height
        ))
    };
    let count = u32::try_from(panels).map_err(|_| too_large())?;
    let width = size.width.checked_mul(count).ok_or_else(too_large)?;
    let height = size.height.checked_add(TITLE_HEIGHT).ok_or_else(too_large)?;
    Ok((width, height))
}

/// Draws `panels` side by side into a PNG at `path`.
///
/// # Errors
///
/// Fails if there is nothing to draw, the image would be too large, or the
/// backend cannot draw or save.
pub fn render_dataset(
    path: &Path,
    title: &str,
    panels: &[HeatMap],
    scale: ColorScale,
    size: PanelSize,
) -> Result<()> {
    if panels.is_empty() {
        return Err(PerfDumpError::RenderError(format!(
            "no time steps to draw for '{title}'"
        )));
    }

    let ranges = panel_ranges(panels, scale);
    let canvas = canvas_size(size, panels.len())?;
    let root = BitMapBackend::new(path, canvas).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;
    let root = root.titled(title, ("sans-serif", 24)).map_err(render_err)?;

    let areas = root.split_evenly((1, panels.len()));
    for ((area, panel), range) in areas.iter().zip(panels).zip(&ranges) {
        draw_panel(area, panel, range)?;
    }

    root.present().map_err(render_err)?;
    log::debug!("rendered {} panels to {}", panels.len(), path.display());
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    panel: &HeatMap,
    range: &ColorRange,
) -> Result<()> {
    let (rows, cols) = panel.dim();

    let mut chart = ChartBuilder::on(area)
        .caption(format!("step {}", panel.step), ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(cell_axis(cols), cell_axis(rows))
        .map_err(render_err)?;

    // Row 0 is drawn at the top, so the y labels count down.
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("column")
        .y_desc("row")
        .x_labels(axis_label_count(cols))
        .y_labels(axis_label_count(rows))
        .x_label_formatter(&|x| cell_label(*x))
        .y_label_formatter(&|y| cell_label((rows - 1) as f64 - y))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(panel.cells().map(|(row, col, value)| {
            let y = (rows - 1 - row) as f64;
            let x = col as f64;
            Rectangle::new(
                [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                blues(range.normalize(value)).filled(),
            )
        }))
        .map_err(render_err)?;

    Ok(())
}
