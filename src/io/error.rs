//! Error types and context management for generation, analysis and export

use crate::spatial::OccupancyGrid;
use std::fmt;
use std::path::{Path, PathBuf};

const UNKNOWN_PATH: &str = "<unknown>";

/// Main error type for all noise generation operations
#[derive(Debug)]
pub enum NoiseError {
    /// Failed to decode a texture from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Energy query against a pattern with nothing to select
    ///
    /// A tightest-cluster query needs at least one "on" cell and a
    /// largest-void query needs at least one "off" cell. Hitting this
    /// means the target count was 0 or N².
    EmptyPattern {
        /// Which query failed
        query: &'static str,
        /// Side length of the grid that was queried
        grid_size: usize,
    },

    /// Pattern balancing exceeded its iteration cap
    BalanceDidNotConverge {
        /// Swaps performed before giving up
        iterations: usize,
        /// Number of "on" cells in the pattern
        on_count: usize,
        /// Pattern state when the cap was reached
        pattern: Box<OccupancyGrid>,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Input data doesn't meet the requirements of the operation
    InvalidSourceData {
        /// Description of what's wrong with the data
        reason: String,
    },

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for NoiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::EmptyPattern { query, grid_size } => {
                write!(
                    f,
                    "Cannot find {query} in a {grid_size}x{grid_size} pattern with no candidate cells"
                )
            }
            Self::BalanceDidNotConverge {
                iterations,
                on_count,
                pattern,
            } => {
                write!(
                    f,
                    "Pattern balancing did not converge after {iterations} swaps ({on_count} of {} cells on)",
                    pattern.len()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for NoiseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for noise generation results
pub type Result<T> = std::result::Result<T, NoiseError>;

/// Fills in location details that `From` conversions cannot know
pub trait WithContext<T> {
    /// Attach the path an I/O or image error refers to
    ///
    /// Only replaces a path that was not known when the error was created.
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;

    /// Attach the file system operation that failed
    ///
    /// # Errors
    ///
    /// Propagates the original error with the operation applied
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<NoiseError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                NoiseError::ImageLoad { path: slot, .. }
                | NoiseError::ImageExport { path: slot, .. }
                | NoiseError::FileSystem { path: slot, .. }
                    if slot.as_os_str() == UNKNOWN_PATH =>
                {
                    *slot = path.to_path_buf();
                }
                _ => {}
            }
            error
        })
    }

    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            if let NoiseError::FileSystem { operation: slot, .. } = &mut error {
                *slot = operation;
            }
            error
        })
    }
}

impl From<image::ImageError> for NoiseError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for NoiseError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> NoiseError {
    NoiseError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> NoiseError {
    NoiseError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
