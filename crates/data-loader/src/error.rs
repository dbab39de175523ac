//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while loading a table
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Input file could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV layer could not decode a record
    #[error("Malformed CSV in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// A record has fewer fields than the schema declares
    #[error("Schema mismatch in {path} at row {row}: expected {expected} columns, found {found}")]
    SchemaMismatch {
        path: String,
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
