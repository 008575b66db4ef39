use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool reads albedo exports, aggregates them, or writes the result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as listing directories or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV failures that are not tied to a specific input file.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when an input file cannot be read or tokenised as CSV.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Raised when the file ends before the column header row.
    #[error("missing column header row in {0}")]
    MissingHeader(PathBuf),

    /// Raised when a required column is absent from the header row.
    #[error("missing column '{column}' in {path}")]
    MissingColumn { path: PathBuf, column: String },

    /// Raised when a cell cannot be parsed into the expected type.
    #[error("invalid value '{value}' in column '{column}' at {path}:{line}")]
    InvalidField {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },

    /// Raised when the input directory holds no matching export files.
    #[error("no albedo export files found in {0}")]
    NoInputFiles(PathBuf),

    /// Raised when the user provides a path that does not exist.
    #[error("input directory not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
