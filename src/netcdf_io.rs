//! NetCDF I/O: reading perf-dump files and writing summaries
//!
//! perf-dump stores one `ranks × steps` dataset of 64-bit counters per PAPI
//! event at the root of an HDF5 file. The netCDF-4 library reads those files
//! directly, so the same `netcdf` bindings are used for reading dumps,
//! writing summary files and generating test dumps.

use crate::dataset::CounterTable;
use crate::errors::{PerfDumpError, Result};
use crate::metadata::DatasetInfo;
use crate::statistics::DatasetSummary;
use chrono::Utc;
use ndarray::{Array1, Array2};
use netcdf::{create, open, File, Variable};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// An open perf-dump file
///
/// The underlying handle is closed when this value is dropped, on success
/// and error paths alike.
pub struct PerfDumpFile {
    path: PathBuf,
    file: File,
}

impl PerfDumpFile {
    /// Open a dump file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = open(&path)?;
        log::debug!("opened {}", path.display());
        Ok(Self { path, file })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name and shape of every 2-D variable, in file order.
    #[must_use]
    pub fn dataset_infos(&self) -> Vec<DatasetInfo> {
        self.file
            .variables()
            .filter_map(|var| {
                let shape = variable_shape(&var);
                match shape.as_slice() {
                    [ranks, steps] => Some(DatasetInfo {
                        name: var.name(),
                        ranks: *ranks,
                        steps: *steps,
                    }),
                    _ => {
                        log::debug!(
                            "skipping variable '{}' with shape {:?} (not ranks x steps)",
                            var.name(),
                            shape
                        );
                        None
                    }
                }
            })
            .collect()
    }

    /// Read one dataset into memory as `f64`.
    ///
    /// # Errors
    ///
    /// Fails if the variable does not exist, is not 2-D, is empty, or cannot
    /// be read as numbers.
    pub fn read_dataset(&self, name: &str) -> Result<CounterTable> {
        let var = self
            .file
            .variable(name)
            .ok_or_else(|| PerfDumpError::DatasetNotFound {
                name: name.to_string(),
            })?;

        let shape = variable_shape(&var);
        let (ranks, steps) = match shape.as_slice() {
            [ranks, steps] => (*ranks, *steps),
            _ => {
                return Err(PerfDumpError::Generic(format!(
                    "Dataset '{}' has shape {:?}, expected ranks x steps",
                    name, shape
                )))
            }
        };
        if ranks == 0 || steps == 0 {
            return Err(PerfDumpError::EmptyDataset {
                name: name.to_string(),
            });
        }

        let data = var.get_values::<f64, _>(..)?;
        log::debug!("read dataset '{}' ({} ranks x {} steps)", name, ranks, steps);
        CounterTable::from_row_major(name, ranks, steps, data)
    }

    /// Read every dataset, in file order.
    pub fn read_all(&self) -> Result<Vec<CounterTable>> {
        self.dataset_infos()
            .iter()
            .map(|info| self.read_dataset(&info.name))
            .collect()
    }
}

impl Drop for PerfDumpFile {
    fn drop(&mut self) {
        log::debug!("closing {}", self.path.display());
    }
}

fn variable_shape(var: &Variable) -> Vec<usize> {
    var.dimensions()
        .iter()
        .map(netcdf::Dimension::len)
        .collect()
}

/// Writes per-step summaries to a NetCDF file
pub struct SummaryWriter<'a> {
    source_path: &'a Path,
    output_path: &'a Path,
}

impl<'a> SummaryWriter<'a> {
    pub fn new(source_path: &'a Path, output_path: &'a Path) -> Self {
        Self {
            source_path,
            output_path,
        }
    }

    /// Write one group of variables per dataset, replacing any existing file.
    ///
    /// For dataset `d` the file gets a `d_steps` dimension and the variables
    /// `d_step`, `d_min`, `d_avg`, `d_max`, `d_ratio_max_avg` and
    /// `d_ratio_max_min` along it.
    pub fn write(&self, summaries: &[DatasetSummary]) -> Result<()> {
        if self.output_path.exists() {
            fs::remove_file(self.output_path)?;
        }

        let mut file = create(self.output_path)?;

        for summary in summaries {
            let dim_name = format!("{}_steps", summary.name);
            let dims = [dim_name.as_str()];
            file.add_dimension(&dim_name, summary.steps.len())?;

            let step_values: Vec<i64> = summary.steps.iter().map(|s| s.step as i64).collect();
            {
                let mut var = file.add_variable::<i64>(&format!("{}_step", summary.name), &dims)?;
                var.put_attribute("long_name", "time step index")?;
                var.put(Array1::from(step_values).view(), ..)?;
            }

            let columns: [(&str, &str, Vec<f64>); 5] = [
                ("min", "minimum over ranks", summary.steps.iter().map(|s| s.min).collect()),
                ("avg", "average over ranks", summary.steps.iter().map(|s| s.average).collect()),
                ("max", "maximum over ranks", summary.steps.iter().map(|s| s.max).collect()),
                (
                    "ratio_max_avg",
                    "max / avg",
                    summary.steps.iter().map(|s| s.ratio_max_avg).collect(),
                ),
                (
                    "ratio_max_min",
                    "max / min",
                    summary.steps.iter().map(|s| s.ratio_max_min).collect(),
                ),
            ];

            for (suffix, long_name, values) in columns {
                let mut var =
                    file.add_variable::<f64>(&format!("{}_{}", summary.name, suffix), &dims)?;
                var.put_attribute("long_name", long_name)?;
                var.put_attribute("ranks", summary.ranks as i64)?;
                var.put(Array1::from(values).view(), ..)?;
            }
        }

        file.add_attribute("source", self.source_path.display().to_string())?;
        file.add_attribute(
            "history",
            format!("Created by perf_dump_tools on {}", Utc::now().to_rfc3339()),
        )?;

        Ok(())
    }
}

/// Write counter tables the way perf-dump lays them out: one 64-bit integer
/// variable per event over shared `rank` and `step` dimensions.
///
/// # Errors
///
/// All tables must have the same shape; file errors are propagated.
pub fn write_counter_dump(path: &Path, tables: &[CounterTable]) -> Result<()> {
    let first = tables
        .first()
        .ok_or_else(|| PerfDumpError::Generic("no datasets to write".to_string()))?;
    let (ranks, steps) = (first.ranks(), first.steps());

    if let Some(odd) = tables
        .iter()
        .find(|t| t.ranks() != ranks || t.steps() != steps)
    {
        return Err(PerfDumpError::Generic(format!(
            "Dataset '{}' is {}x{}, expected {}x{} like '{}'",
            odd.name(),
            odd.ranks(),
            odd.steps(),
            ranks,
            steps,
            first.name()
        )));
    }

    if path.exists() {
        fs::remove_file(path)?;
    }

    let mut file = create(path)?;
    file.add_dimension("rank", ranks)?;
    file.add_dimension("step", steps)?;

    for table in tables {
        let counters: Array2<i64> = table.values().mapv(|v| v.round() as i64);
        let mut var = file.add_variable::<i64>(table.name(), &["rank", "step"])?;
        var.put(counters.view(), ..)?;
    }

    Ok(())
}
