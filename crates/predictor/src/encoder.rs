//! Label encoders for categorical model inputs.
//!
//! An encoder is the sorted class list a model was fitted with; a label is
//! encoded as its index in that list.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Encode `label`, reporting `column` when the label is unknown
    pub fn transform(&self, column: &str, label: &str) -> Result<f64, InputError> {
        self.classes
            .iter()
            .position(|c| c == label)
            .map(|idx| idx as f64)
            .ok_or_else(|| InputError::UnknownCategory {
                field: column.to_string(),
                value: label.to_string(),
            })
    }
}
