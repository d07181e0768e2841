//! Error types for the predictor crate.
//!
//! `ModelError` covers artifacts and inference; `InputError` covers the form
//! values a user submits. They stay separate so handlers can tell a bad
//! submission from a broken deployment.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading model artifacts or running inference
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed artifact {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Model expects {expected} features but received {found}")]
    FeatureCountMismatch { expected: usize, found: usize },

    #[error("Model produced {found} outputs, expected {expected}")]
    OutputCountMismatch { expected: usize, found: usize },
}

/// Problems with a submitted form, one variant per cause
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Missing field '{field}'")]
    MissingField { field: String },

    #[error("'{value}' is not a valid number for {field}")]
    MalformedNumber { field: String, value: String },

    #[error("Unknown {field} '{value}'")]
    UnknownCategory { field: String, value: String },
}

impl From<data_loader::UnknownCategory> for InputError {
    fn from(err: data_loader::UnknownCategory) -> Self {
        InputError::UnknownCategory {
            field: err.field.to_string(),
            value: err.value,
        }
    }
}

/// Any failure while turning a form into a prediction
#[derive(Error, Debug)]
pub enum PredictionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, ModelError>;
