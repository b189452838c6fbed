//! Heat map panels and coordinate lookup

use crate::errors::{PerfDumpError, Result};
use ndarray::{Array2, ArrayD, Ix2};

/// One projected time step ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct HeatMap {
    pub step: usize,
    grid: Array2<f64>,
}

/// Cell under a data coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellValue {
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

impl HeatMap {
    /// Wrap a projected grid. One-dimensional grids become a single row.
    ///
    /// # Errors
    ///
    /// Returns [`PerfDumpError::InvalidDimensions`] for grids with more
    /// than two dimensions.
    pub fn from_grid(step: usize, grid: ArrayD<f64>) -> Result<Self> {
        let grid = match grid.ndim() {
            1 => {
                let len = grid.len();
                grid.into_shape((1, len))?
            }
            2 => grid.into_dimensionality::<Ix2>()?,
            n => {
                return Err(PerfDumpError::InvalidDimensions {
                    message: format!("heat maps need one or two dimensions, got {n}"),
                })
            }
        };
        Ok(Self { step, grid })
    }

    /// `(rows, cols)`
    #[must_use]
    pub fn dim(&self) -> (usize, usize) {
        self.grid.dim()
    }

    #[must_use]
    pub fn grid(&self) -> &Array2<f64> {
        &self.grid
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.grid.iter().copied()
    }

    /// `(row, col, value)` for every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.grid
            .indexed_iter()
            .map(|((row, col), &value)| (row, col, value))
    }

    /// Cell nearest to the data coordinate `(x, y)`, where `x` runs along
    /// columns and `y` along rows with cell centers at integer positions.
    #[must_use]
    pub fn cell_at(&self, x: f64, y: f64) -> Option<CellValue> {
        let col = (x + 0.5).floor();
        let row = (y + 0.5).floor();
        let (rows, cols) = self.dim();
        if col < 0.0 || row < 0.0 || col >= cols as f64 || row >= rows as f64 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        Some(CellValue {
            row,
            col,
            value: self.grid[[row, col]],
        })
    }

    /// Status-bar text for a coordinate: `x=…, y=…, z=…` inside the grid,
    /// `x=…, y=…` outside it.
    #[must_use]
    pub fn format_coord(&self, x: f64, y: f64) -> String {
        match self.cell_at(x, y) {
            Some(cell) => format!("x={:.4}, y={:.4}, z={:.4}", x, y, cell.value),
            None => format!("x={:.4}, y={:.4}", x, y),
        }
    }
}
