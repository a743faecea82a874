//! Error types for spacex-dash

use thiserror::Error;

/// Result type alias for spacex-dash operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for spacex-dash
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse launch records: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid launch record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    #[error("Launch records file contains no rows")]
    EmptyDataset,

    #[error("No callback listens to component '{0}'")]
    UnknownComponent(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
