//! Error types for data loading and background threads.

use std::any::Any;

use color_eyre::eyre::{Report, eyre};
use thiserror::Error;

/// Errors produced while reading or shaping table data.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Underlying file could not be read
    #[error("failed to read data file: {_0}")]
    Io(#[from] std::io::Error),

    /// Delimited text could not be parsed
    #[error("failed to parse csv data: {_0}")]
    Csv(#[from] csv::Error),

    /// JSON could not be parsed
    #[error("failed to parse json data: {_0}")]
    Json(#[from] serde_json::Error),

    /// Rows and columns do not line up
    #[error("inconsistent table data: {_0}")]
    Shape(String),

    /// File extension not recognized by any data source
    #[error("unsupported data file: {_0}")]
    Unsupported(String),
}

/// Custom Result type for data source operations. All errors exposed by
/// the source module are returned as [`SourceError`]
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Converts a joined thread's panic payload into a readable report.
pub fn report_from_thread_panic(e: Box<dyn Any + Send>) -> Report {
    if let Some(value) = e.downcast_ref::<&str>() {
        eyre!("thread panicked with {value}")
    } else if let Some(value) = e.downcast_ref::<String>() {
        eyre!("thread panicked with {value}")
    } else {
        eyre!("thread panicked for unknown reason")
    }
}
