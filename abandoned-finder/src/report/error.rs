//! Report error types.

use thiserror::Error;

/// Errors that can occur while writing the report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to create the output file.
    #[error("Failed to create file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize or flush CSV rows.
    #[error("Failed to write CSV: {0}")]
    CsvError(#[from] csv::Error),
}
