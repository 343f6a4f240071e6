//! Error types for dataset ingestion and export.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read the raw bytes.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The decoded input holds no data at all.
    #[error("CSV input is empty")]
    EmptyCsv,

    /// Polars could not parse the decoded text as CSV.
    #[error("failed to parse CSV: {message}")]
    CsvParse { message: String },

    /// Failed to create or write the export file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Polars failed while serializing the frame.
    #[error("failed to serialize CSV: {message}")]
    CsvWrite { message: String },
}
