//! Run configuration passed explicitly into the pipelines

use crate::cli::{PlotArgs, ProcessArgs};
use crate::projection::GridShape;
use crate::render::{ColorScale, PanelSize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Output format of the process tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for summarizing a dump
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessConfig {
    pub source: PathBuf,
    pub timesteps: Option<Vec<i64>>,
    pub format: OutputFormat,
    pub output_netcdf: Option<PathBuf>,
}

impl ProcessConfig {
    /// Summarize every step of `source` as text.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            timesteps: None,
            format: OutputFormat::Text,
            output_netcdf: None,
        }
    }

    #[must_use]
    pub fn with_timesteps(mut self, timesteps: Vec<i64>) -> Self {
        self.timesteps = Some(timesteps);
        self
    }
}

impl From<&ProcessArgs> for ProcessConfig {
    fn from(args: &ProcessArgs) -> Self {
        Self {
            source: args.source_file.clone(),
            timesteps: args.timesteps.clone(),
            format: if args.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            output_netcdf: args.output_netcdf.clone(),
        }
    }
}

/// Configuration for plotting a dump
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub source: PathBuf,
    pub dims: GridShape,
    pub timesteps: Option<Vec<i64>>,
    pub output_dir: PathBuf,
    pub scale: ColorScale,
    pub panel_size: PanelSize,
}

impl PlotConfig {
    /// Plot every step of `source` on `dims` into the current directory.
    pub fn new(source: impl Into<PathBuf>, dims: GridShape) -> Self {
        Self {
            source: source.into(),
            dims,
            timesteps: None,
            output_dir: PathBuf::from("."),
            scale: ColorScale::default(),
            panel_size: PanelSize::default(),
        }
    }

    #[must_use]
    pub fn with_timesteps(mut self, timesteps: Vec<i64>) -> Self {
        self.timesteps = Some(timesteps);
        self
    }

    /// Image path for a dataset.
    #[must_use]
    pub fn image_path(&self, dataset: &str) -> PathBuf {
        self.output_dir.join(format!("{}.png", file_stem(dataset)))
    }

    /// Image paths for `datasets`, in order, one distinct file each.
    ///
    /// Names that map to the same file name get `_2`, `_3`, ... suffixes in
    /// the order they appear.
    #[must_use]
    pub fn image_paths(&self, datasets: &[&str]) -> Vec<PathBuf> {
        let mut used = HashSet::with_capacity(datasets.len());
        datasets
            .iter()
            .map(|&dataset| {
                let base = file_stem(dataset);
                let mut stem = base.clone();
                let mut suffix = 2;
                while !used.insert(stem.clone()) {
                    stem = format!("{base}_{suffix}");
                    suffix += 1;
                }
                if stem != base {
                    log::warn!(
                        "dataset '{}' would overwrite {}.png, writing {}.png instead",
                        dataset,
                        base,
                        stem
                    );
                }
                self.output_dir.join(format!("{stem}.png"))
            })
            .collect()
    }
}

fn file_stem(dataset: &str) -> String {
    dataset
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect()
}

impl From<&PlotArgs> for PlotConfig {
    fn from(args: &PlotArgs) -> Self {
        Self {
            source: args.source_file.clone(),
            dims: args.dims.clone(),
            timesteps: args.timesteps.clone(),
            output_dir: args.output_dir.clone(),
            scale: args.scale,
            panel_size: PanelSize {
                width: args.width,
                height: args.height,
            },
        }
    }
}
