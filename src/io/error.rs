//! Error types for maze construction and rendering

use std::fmt;
use std::path::{Path, PathBuf};

/// Every failure a maze run can report
///
/// Carving and solving themselves cannot fail once a grid exists; errors
/// come from rejected inputs and from writing output files.
#[derive(Debug)]
pub enum MazeError {
    /// Grid dimensions rejected before allocation
    InvalidDimensions {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
        /// What is wrong with them
        reason: String,
    },

    /// A rendering or command-line value is out of range
    InvalidParameter {
        /// Name of the offending parameter
        parameter: &'static str,
        /// The value as given
        value: String,
        /// What is wrong with it
        reason: String,
    },

    /// Export was requested but nothing has been drawn
    NothingToRender {
        /// What is missing
        reason: String,
    },

    /// An image could not be encoded or saved
    ImageExport {
        /// Destination file
        path: PathBuf,
        /// Encoder error
        source: image::ImageError,
    },

    /// Creating a file or directory failed
    FileSystem {
        /// File or directory involved
        path: PathBuf,
        /// Short name of the attempted operation
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl MazeError {
    /// Wrap an encoder failure for `path`
    pub fn image_export(path: &Path, source: image::ImageError) -> Self {
        Self::ImageExport {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wrap an I/O failure of `operation` on `path`
    pub fn file_system(path: &Path, operation: &'static str, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        }
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols, reason } => {
                write!(f, "cannot build a {rows}x{cols} grid: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "{parameter} = {value} rejected: {reason}"),
            Self::NothingToRender { reason } => write!(f, "nothing to render: {reason}"),
            Self::ImageExport { path, source } => {
                write!(f, "could not write image {}: {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => write!(f, "{operation} failed for {}: {source}", path.display()),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidDimensions { .. }
            | Self::InvalidParameter { .. }
            | Self::NothingToRender { .. } => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, MazeError>;

/// Build an [`MazeError::InvalidParameter`] from displayable parts
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
