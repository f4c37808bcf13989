//! Error types for DXF extraction.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a drawing from being read at all.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The file could not be opened.
    #[error("Failed to open DXF file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a readable DXF drawing.
    #[error("Failed to parse DXF file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;
