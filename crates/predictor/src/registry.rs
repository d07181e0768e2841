//! Loading model artifacts and turning forms into predictions.
//!
//! An artifacts directory holds, for each model, a JSON list of feature
//! columns and the model itself, plus one label encoder per categorical
//! column (`<Column>_encoder.json`). A column with an encoder is encoded
//! through it; every other column is parsed as a float.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::calories::CaloriePrediction;
use crate::encoder::LabelEncoder;
use crate::error::{InputError, ModelError, PredictionError, Result};
use crate::form::{float_field, required, FormFields};
use crate::macros::{MacroBreakdown, Macronutrient};
use crate::model::RegressionModel;

pub const CALORIES_FEATURES_FILE: &str = "feature_columns.json";
pub const CALORIES_MODEL_FILE: &str = "calories_burned_model.json";
pub const MACROS_FEATURES_FILE: &str = "macros_feature_columns.json";
pub const MACROS_MODEL_FILE: &str = "macros_model.json";

/// File name of the label encoder for `column`
pub fn encoder_file(column: &str) -> String {
    format!("{column}_encoder.json")
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ModelError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// A regression model together with the columns and encoders it was fitted on
#[derive(Debug, Clone)]
pub struct FeatureModel {
    columns: Vec<String>,
    encoders: HashMap<String, LabelEncoder>,
    model: RegressionModel,
}

impl FeatureModel {
    /// Assemble a model, checking it accepts one feature per column
    pub fn new(
        columns: Vec<String>,
        encoders: HashMap<String, LabelEncoder>,
        model: RegressionModel,
    ) -> Result<Self> {
        if columns.is_empty() {
            return Err(ModelError::InvalidModel("no feature columns".into()));
        }
        model.validate(columns.len())?;
        Ok(Self {
            columns,
            encoders,
            model,
        })
    }

    /// Load `columns_file`, `model_file` and any encoders for those columns
    pub fn load(dir: &Path, columns_file: &str, model_file: &str) -> Result<Self> {
        let columns: Vec<String> = read_json(&dir.join(columns_file))?;

        let mut encoders = HashMap::new();
        for column in &columns {
            let path = dir.join(encoder_file(column));
            if path.is_file() {
                let encoder: LabelEncoder = read_json(&path)?;
                debug!("Loaded encoder for {} ({} classes)", column, encoder.classes().len());
                encoders.insert(column.clone(), encoder);
            }
        }

        let model: RegressionModel = read_json(&dir.join(model_file))?;
        Self::new(columns, encoders, model)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn n_outputs(&self) -> usize {
        self.model.n_outputs()
    }

    /// The feature vector for a form, in column order
    pub fn encode(&self, form: &FormFields) -> std::result::Result<Vec<f64>, InputError> {
        self.columns
            .iter()
            .map(|column| match self.encoders.get(column) {
                Some(encoder) => encoder.transform(column, required(form, column)?),
                None => float_field(form, column),
            })
            .collect()
    }

    pub fn predict(&self, form: &FormFields) -> std::result::Result<Vec<f64>, PredictionError> {
        let features = self.encode(form)?;
        Ok(self.model.predict(&features)?)
    }
}

/// Both predictor models, loaded once at startup and shared read-only
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    calories: FeatureModel,
    macros: FeatureModel,
}

impl ModelRegistry {
    pub fn new(calories: FeatureModel, macros: FeatureModel) -> Result<Self> {
        if calories.n_outputs() != 1 {
            return Err(ModelError::OutputCountMismatch {
                expected: 1,
                found: calories.n_outputs(),
            });
        }
        if macros.n_outputs() != Macronutrient::ALL.len() {
            return Err(ModelError::OutputCountMismatch {
                expected: Macronutrient::ALL.len(),
                found: macros.n_outputs(),
            });
        }
        Ok(Self { calories, macros })
    }

    /// Load every artifact from `dir`
    pub fn load(dir: &Path) -> Result<Self> {
        let start = Instant::now();
        info!("Loading model artifacts from {}", dir.display());

        let calories = FeatureModel::load(dir, CALORIES_FEATURES_FILE, CALORIES_MODEL_FILE)?;
        let macros = FeatureModel::load(dir, MACROS_FEATURES_FILE, MACROS_MODEL_FILE)?;
        let registry = Self::new(calories, macros)?;

        info!(
            "Loaded calories model ({} features) and macros model ({} features) in {:.2?}",
            registry.calories.columns().len(),
            registry.macros.columns().len(),
            start.elapsed()
        );
        Ok(registry)
    }

    pub fn predict_calories(
        &self,
        form: &FormFields,
    ) -> std::result::Result<CaloriePrediction, PredictionError> {
        let outputs = self.calories.predict(form)?;
        let raw = outputs.first().copied().ok_or(ModelError::OutputCountMismatch {
            expected: 1,
            found: 0,
        })?;
        Ok(CaloriePrediction::from_raw(raw))
    }

    pub fn predict_macros(
        &self,
        form: &FormFields,
    ) -> std::result::Result<MacroBreakdown, PredictionError> {
        let outputs = self.macros.predict(form)?;
        Ok(MacroBreakdown::from_outputs(&outputs)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinearModel;

    fn encoders() -> HashMap<String, LabelEncoder> {
        HashMap::from([(
            "BMI_Category".to_string(),
            LabelEncoder::new(vec!["Normal".to_string(), "Obese".to_string()]),
        )])
    }

    fn model() -> FeatureModel {
        FeatureModel::new(
            vec!["Duration".to_string(), "BMI_Category".to_string()],
            encoders(),
            RegressionModel::Linear(LinearModel {
                coefficients: vec![vec![1.0, 0.25]],
                intercepts: vec![0.0],
            }),
        )
        .unwrap()
    }

    fn form(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_encode_mixes_floats_and_labels() {
        let features = model()
            .encode(&form(&[("Duration", "0.5"), ("BMI_Category", "Obese")]))
            .unwrap();
        assert_eq!(features, vec![0.5, 1.0]);
    }

    #[test]
    fn test_encode_reports_distinct_errors() {
        let model = model();
        assert!(matches!(
            model.encode(&form(&[("Duration", "abc"), ("BMI_Category", "Obese")])),
            Err(InputError::MalformedNumber { .. })
        ));
        assert!(matches!(
            model.encode(&form(&[("Duration", "0.5"), ("BMI_Category", "Huge")])),
            Err(InputError::UnknownCategory { .. })
        ));
        assert!(matches!(
            model.encode(&form(&[("Duration", "0.5")])),
            Err(InputError::MissingField { .. })
        ));
    }

    #[test]
    fn test_new_rejects_mismatched_model() {
        let result = FeatureModel::new(
            vec!["Duration".to_string()],
            HashMap::new(),
            RegressionModel::Linear(LinearModel {
                coefficients: vec![vec![1.0, 1.0]],
                intercepts: vec![0.0],
            }),
        );
        assert!(matches!(result, Err(ModelError::FeatureCountMismatch { .. })));
    }

    #[test]
    fn test_registry_requires_three_macro_outputs() {
        let result = ModelRegistry::new(model(), model());
        assert!(matches!(
            result,
            Err(ModelError::OutputCountMismatch { expected: 3, found: 1 })
        ));
    }
}
