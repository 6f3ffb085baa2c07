use std::net::AddrParseError;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use thiserror::Error;

/// Errors raised while loading the sales dataset. All of them are fatal:
/// the dashboard cannot start without a valid dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open data file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    /// `row` counts data rows from 1, not including the header.
    #[error("row {row}: null value in column '{column}'")]
    NullValue { row: usize, column: String },
    #[error("row {row}: cannot parse order date '{value}'")]
    InvalidDate { row: usize, value: String },
    #[error("dataset contains no rows")]
    Empty,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid bind address '{value}': {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}
