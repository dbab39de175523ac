//! Error types for the report crate.

use thiserror::Error;

/// Errors that can occur while building or writing a report
#[derive(Error, Debug)]
pub enum ReportError {
    /// A source table failed to load
    #[error(transparent)]
    Load(#[from] data_loader::DataLoadError),

    /// A builder was handed a table without a column it needs
    #[error("Table has no column named '{name}'")]
    MissingColumn { name: String },

    /// The requested movie id has no title in the movies table
    #[error("No title found for movie id {movie_id}")]
    TitleNotFound { movie_id: i64 },

    /// The rating report is absent immediately after the write returned
    #[error("File {path} not found after write")]
    WriteVerification { path: String },

    /// I/O error while writing an output artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON payload could not be serialized
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The CSV part file could not be written
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ReportError>;
