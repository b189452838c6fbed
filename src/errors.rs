//! Centralized error handling for perf_dump_tools
//!
//! Every failure in the tools is fatal to the run. User-input errors
//! (bad time steps, bad dimensions) carry enough context to tell the user
//! what the valid input looks like; library failures are wrapped as-is.

use std::fmt;

/// Main error type for perf_dump_tools operations
#[derive(Debug)]
pub enum PerfDumpError {
    /// NetCDF/HDF5 file operation errors
    NetCDFError(netcdf::Error),

    /// I/O operation errors
    IoError(std::io::Error),

    /// A requested time step is outside `[0, steps - 1]`
    InvalidTimestep { requested: i64, steps: usize },

    /// Product of the projection dimensions differs from the rank count
    ShapeMismatch { dims: Vec<usize>, ranks: usize },

    /// Dimensions string could not be parsed or cannot be rendered
    InvalidDimensions { message: String },

    /// Dataset has no ranks or no time steps
    EmptyDataset { name: String },

    /// Dataset not present in the source file
    DatasetNotFound { name: String },

    /// Statistics computation errors
    StatisticsError(String),

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),

    /// Heat map drawing failed
    RenderError(String),

    /// JSON serialization failed
    JsonError(serde_json::Error),

    /// Generic error for everything else
    Generic(String),
}

impl fmt::Display for PerfDumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerfDumpError::NetCDFError(e) => write!(f, "NetCDF error: {}", e),
            PerfDumpError::IoError(e) => write!(f, "I/O error: {}", e),
            PerfDumpError::InvalidTimestep { requested, steps } => write!(
                f,
                "All time steps must be in the data set. Range is [0..{}] (got {})",
                steps.saturating_sub(1),
                requested
            ),
            PerfDumpError::ShapeMismatch { dims, ranks } => write!(
                f,
                "Product of dimensions must equal number of ranks ({} != {})",
                dims.iter()
                    .map(|d| d.to_string())
                    .collect::<Vec<_>>()
                    .join("x"),
                ranks
            ),
            PerfDumpError::InvalidDimensions { message } => {
                write!(f, "Invalid dimensions: {}", message)
            }
            PerfDumpError::EmptyDataset { name } => {
                write!(f, "Dataset '{}' has no ranks or no time steps", name)
            }
            PerfDumpError::DatasetNotFound { name } => {
                write!(f, "Dataset '{}' not found in file", name)
            }
            PerfDumpError::StatisticsError(msg) => {
                write!(f, "Statistics computation error: {}", msg)
            }
            PerfDumpError::ArrayError(e) => write!(f, "Array error: {}", e),
            PerfDumpError::RenderError(msg) => write!(f, "Rendering error: {}", msg),
            PerfDumpError::JsonError(e) => write!(f, "JSON error: {}", e),
            PerfDumpError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PerfDumpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PerfDumpError::NetCDFError(e) => Some(e),
            PerfDumpError::IoError(e) => Some(e),
            PerfDumpError::ArrayError(e) => Some(e),
            PerfDumpError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<netcdf::Error> for PerfDumpError {
    fn from(error: netcdf::Error) -> Self {
        PerfDumpError::NetCDFError(error)
    }
}

impl From<std::io::Error> for PerfDumpError {
    fn from(error: std::io::Error) -> Self {
        PerfDumpError::IoError(error)
    }
}

impl From<ndarray::ShapeError> for PerfDumpError {
    fn from(error: ndarray::ShapeError) -> Self {
        PerfDumpError::ArrayError(error)
    }
}

impl From<serde_json::Error> for PerfDumpError {
    fn from(error: serde_json::Error) -> Self {
        PerfDumpError::JsonError(error)
    }
}

/// Result type alias for perf_dump_tools operations
pub type Result<T> = std::result::Result<T, PerfDumpError>;
