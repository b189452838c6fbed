//! perf_dump_tools: summarize and plot perf-dump counter files
//!
//! perf-dump records PAPI hardware counters for every MPI rank at selected
//! time steps of an application run and stores them as one `ranks × steps`
//! dataset per counter in an HDF5 file. This library reads those files and
//! either summarizes each time step (min/avg/max and imbalance ratios) or
//! projects each step onto the application's process grid and draws it as a
//! heat map.
//!
//! ## Module Organization
//!
//! - [`netcdf_io`]: reading dump files, writing summary files
//! - [`dataset`]: in-memory counter tables
//! - [`timesteps`]: time-step selection
//! - [`projection`]: reshaping per-rank vectors onto grids
//! - [`statistics`]: per-step summaries and their text/JSON forms
//! - [`render`]: heat map panels, color scaling and PNG output
//! - [`pipeline`]: the end-to-end runs behind the two binaries
//! - [`metadata`]: dataset listing
//! - [`errors`]: centralized error handling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use perf_dump_tools::prelude::*;
//!
//! let file = PerfDumpFile::open("perf-dump.h5").unwrap();
//! for table in file.read_all().unwrap() {
//!     let steps = resolve_timesteps(table.steps(), None).unwrap();
//!     for summary in summarize_table(&table, &steps).unwrap() {
//!         println!("{}", format_summary_line(&summary));
//!     }
//! }
//! ```

pub mod cli;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod logging;
pub mod metadata;
pub mod netcdf_io;
pub mod pipeline;
pub mod projection;
pub mod render;
pub mod statistics;
pub mod timesteps;

pub use errors::{PerfDumpError, Result};

pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::config::{OutputFormat, PlotConfig, ProcessConfig};
    pub use crate::dataset::CounterTable;
    pub use crate::errors::{PerfDumpError, Result};
    pub use crate::netcdf_io::{write_counter_dump, PerfDumpFile, SummaryWriter};
    pub use crate::projection::{flatten, project, GridShape};
    pub use crate::render::{ColorRange, ColorScale, HeatMap, PanelSize};
    pub use crate::statistics::{
        format_summary_line, summarize, summarize_table, DatasetSummary, StepSummary,
    };
    pub use crate::timesteps::resolve_timesteps;
}
