use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for loading and transformation operations.
pub type EtlResult<T> = Result<T, EtlError>;

/// Error type returned by sources, table transformations, and writers.
///
/// A single enum is shared across the crate so that `?` works from loading through output.
#[derive(Debug, Error)]
pub enum EtlError {
    /// Underlying I/O error (e.g. permission denied, read failure).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited text reading/writing error (including ragged rows).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON rendering error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The missing-value token did not compile into a valid pattern.
    #[error("invalid missing-value pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The source file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The configured text encoding label is not known.
    #[error("unknown text encoding '{label}'")]
    UnknownEncoding { label: String },

    /// The requested header row lies past the end of the input.
    #[error("header row {index} is out of range (input has {lines} lines)")]
    HeaderRowOutOfRange { index: usize, lines: usize },

    /// A column name is not present in the table headers.
    #[error("column not found: '{name}'. headers={headers:?}")]
    ColumnNotFound { name: String, headers: Vec<String> },

    /// Two lists that must be paired element-wise differ in length.
    #[error("length mismatch: expected {expected} items, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A word is outside the number-word vocabulary.
    #[error("unrecognized token '{word}' in number phrase")]
    UnrecognizedToken { word: String },

    /// A number phrase describes a value that does not fit in an `i64`.
    #[error("number phrase '{phrase}' overflows a 64-bit integer")]
    NumberOverflow { phrase: String },

    /// A cell could not be parsed as a number.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// A cell holds a value of the wrong kind for the requested transformation.
    #[error("unexpected value at row {row} column '{column}': {message}")]
    UnexpectedValue {
        row: usize,
        column: String,
        message: String,
    },
}
