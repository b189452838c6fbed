//! Projection of per-rank vectors onto grids
//!
//! A perf-dump column holds one value per MPI rank. To see spatial structure
//! in the counters the column is laid out on the process grid of the
//! application, e.g. 8x32 for a 256-rank run, filling the grid in row-major
//! order.

use crate::errors::{PerfDumpError, Result};
use ndarray::{ArrayD, IxDyn};
use std::fmt;
use std::str::FromStr;

/// Target shape of a projection, e.g. `[8, 32]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridShape {
    dims: Vec<usize>,
}

impl GridShape {
    /// Create a shape from explicit dimensions.
    ///
    /// # Errors
    ///
    /// Fails if there are no dimensions or any dimension is zero.
    pub fn new(dims: Vec<usize>) -> Result<Self> {
        if dims.is_empty() {
            return Err(PerfDumpError::InvalidDimensions {
                message: "at least one dimension is required".to_string(),
            });
        }
        if dims.iter().any(|&d| d == 0) {
            return Err(PerfDumpError::InvalidDimensions {
                message: format!("dimensions must be positive, got {:?}", dims),
            });
        }
        Ok(Self { dims })
    }

    /// The flat shape used when summarizing: one axis of `ranks` entries.
    #[must_use]
    pub fn flat(ranks: usize) -> Self {
        Self { dims: vec![ranks] }
    }

    /// Parse an `x`-separated dimensions string such as `8x32`.
    ///
    /// # Errors
    ///
    /// Fails on empty parts, non-integers and zero-sized dimensions.
    pub fn parse(s: &str) -> Result<Self> {
        let dims = s
            .split('x')
            .map(|part| {
                part.trim()
                    .parse::<usize>()
                    .map_err(|_| PerfDumpError::InvalidDimensions {
                        message: format!(
                            "'{}' is not a valid dimension in '{}' (expected e.g. 8x32)",
                            part, s
                        ),
                    })
            })
            .collect::<Result<Vec<usize>>>()?;
        Self::new(dims)
    }

    #[must_use]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Number of cells in the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.dims.iter().product()
    }

    #[must_use]
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Checks that the grid holds exactly `ranks` cells.
    ///
    /// # Errors
    ///
    /// Returns [`PerfDumpError::ShapeMismatch`] when the product differs.
    pub fn check_ranks(&self, ranks: usize) -> Result<()> {
        if self.size() != ranks {
            return Err(PerfDumpError::ShapeMismatch {
                dims: self.dims.clone(),
                ranks,
            });
        }
        Ok(())
    }
}

impl FromStr for GridShape {
    type Err = PerfDumpError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.dims.iter().map(|d| d.to_string()).collect();
        write!(f, "{}", parts.join("x"))
    }
}

/// Lays `values` out on a grid of `shape` in row-major order.
///
/// Values are converted to `f64`; no range checks are made, negative and
/// zero counters are kept as they are.
///
/// # Errors
///
/// Returns [`PerfDumpError::ShapeMismatch`] if the product of the dimensions
/// is not `values.len()`. Nothing is allocated in that case.
pub fn project<T>(values: &[T], shape: &GridShape) -> Result<ArrayD<f64>>
where
    T: Copy + Into<f64>,
{
    shape.check_ranks(values.len())?;
    let data: Vec<f64> = values.iter().map(|&v| v.into()).collect();
    Ok(ArrayD::from_shape_vec(IxDyn(shape.dims()), data)?)
}

/// Reads a grid back in row-major order.
#[must_use]
pub fn flatten(grid: &ArrayD<f64>) -> Vec<f64> {
    grid.iter().copied().collect()
}
