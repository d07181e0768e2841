//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while loading and parsing the fitness dataset
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The dataset path does not exist
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// Any other failure reading the dataset
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file has no header row
    #[error("Dataset {file} is empty (no header row)")]
    EmptyFile { file: String },

    /// A column the recommenders rely on is absent from the header
    #[error("Dataset {file} is missing required column '{column}'")]
    MissingColumn { file: String, column: String },

    /// A numeric cell is not a number; `line` is 1-based and counts the header
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A row has a different number of cells than the header
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
