//! In-memory counter tables
//!
//! perf-dump writes one dataset per PAPI event. Each is a `ranks × steps`
//! table of counter values; rows are MPI ranks and columns are the dumped
//! time steps.

use crate::errors::{PerfDumpError, Result};
use ndarray::{Array2, Axis};

/// One named `ranks × steps` counter table
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTable {
    name: String,
    values: Array2<f64>,
}

impl CounterTable {
    /// Wrap a table, rejecting tables without ranks or steps.
    ///
    /// # Errors
    ///
    /// Returns [`PerfDumpError::EmptyDataset`] if either axis is empty.
    pub fn new(name: impl Into<String>, values: Array2<f64>) -> Result<Self> {
        let name = name.into();
        if values.nrows() == 0 || values.ncols() == 0 {
            return Err(PerfDumpError::EmptyDataset { name });
        }
        Ok(Self { name, values })
    }

    /// Build a table from row-major data.
    ///
    /// # Errors
    ///
    /// Fails if `data.len() != ranks * steps` or the table is empty.
    pub fn from_row_major(
        name: impl Into<String>,
        ranks: usize,
        steps: usize,
        data: Vec<f64>,
    ) -> Result<Self> {
        let values = Array2::from_shape_vec((ranks, steps), data)?;
        Self::new(name, values)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn ranks(&self) -> usize {
        self.values.nrows()
    }

    #[must_use]
    pub fn steps(&self) -> usize {
        self.values.ncols()
    }

    #[must_use]
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Per-rank values of one time step (one column of the table).
    ///
    /// # Errors
    ///
    /// Returns [`PerfDumpError::InvalidTimestep`] if `step` is out of range.
    pub fn step_values(&self, step: usize) -> Result<Vec<f64>> {
        if step >= self.steps() {
            return Err(PerfDumpError::InvalidTimestep {
                requested: step as i64,
                steps: self.steps(),
            });
        }
        Ok(self.values.index_axis(Axis(1), step).to_vec())
    }
}
