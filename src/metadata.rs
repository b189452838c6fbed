//! Dataset listing for perf-dump files
//!
//! Describes which counter tables a dump contains and their shape, so the
//! user can pick matching projection dimensions before plotting.

use crate::netcdf_io::PerfDumpFile;

/// Name and shape of one counter table in a dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetInfo {
    pub name: String,
    pub ranks: usize,
    pub steps: usize,
}

impl DatasetInfo {
    /// Two-dimensional factorizations `rows x cols` of the rank count,
    /// useful as `dims` arguments for plotting.
    #[must_use]
    pub fn grid_candidates(&self) -> Vec<(usize, usize)> {
        (1..=self.ranks)
            .filter(|rows| self.ranks % rows == 0)
            .map(|rows| (rows, self.ranks / rows))
            .collect()
    }
}

/// Lists all datasets of a dump in a clean, organized format.
pub fn list_datasets(file: &PerfDumpFile) -> Vec<DatasetInfo> {
    let datasets = file.dataset_infos();

    println!("\n Datasets in {}", file.path().display());
    println!("==============");

    if datasets.is_empty() {
        println!("   (No ranks x steps datasets found)");
        return datasets;
    }

    let name_width = datasets.iter().map(|d| d.name.len()).max().unwrap_or(0);
    for info in &datasets {
        println!(
            "    {:<width$}  {} ranks x {} steps",
            info.name,
            info.ranks,
            info.steps,
            width = name_width
        );
    }

    if let Some(first) = datasets.first() {
        let grids: Vec<String> = first
            .grid_candidates()
            .iter()
            .map(|(r, c)| format!("{}x{}", r, c))
            .collect();
        println!("\n💡 Grid dimensions for {} ranks: {}", first.ranks, grids.join(", "));
    }

    datasets
}
