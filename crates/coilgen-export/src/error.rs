//! Error types for fabrication-file export.

use std::io;
use thiserror::Error;

/// Errors that can occur while writing fabrication files.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The requested output format or file extension is not recognized.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// The point sequence holds no points; a valid generation always
    /// yields at least one, so this is rejected before any file handle
    /// opens.
    #[error("Nothing to export: the point sequence is empty")]
    EmptyTrace,

    /// I/O failure while writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
