//! # Export Errors
//!
//! Error types for mesh export operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing a mesh file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Filesystem error on the output path
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The mesh exceeds what the file format can index
    #[error("Too many triangles for STL: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: u32 },
}

impl ExportError {
    /// Wraps an IO error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
