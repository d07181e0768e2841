//! # Predictor Crate
//!
//! Pre-trained regression models and the rule-based helpers of the
//! predictor app.
//!
//! ## Main Components
//!
//! - **registry**: Load model artifacts and map submitted forms to predictions
//! - **model**: Linear and random-forest regressors read from JSON
//! - **encoder**: Label encoders for categorical inputs
//! - **form**: Typed access to submitted form fields
//! - **calories** / **macros**: Prediction results and their summaries
//! - **workout**: Time split of a workout by goal
//! - **advice**: Quotes and tips
//! - **planner**: Daily health planner
//!
//! ## Example Usage
//!
//! ```ignore
//! use predictor::ModelRegistry;
//! use std::path::Path;
//!
//! let registry = ModelRegistry::load(Path::new("prediction_utils"))?;
//! let prediction = registry.predict_calories(&form)?;
//! println!("{} ({})", prediction.value, prediction.summary());
//! ```

pub mod error;
pub mod form;
pub mod encoder;
pub mod model;
pub mod registry;
pub mod calories;
pub mod macros;
pub mod workout;
pub mod advice;
pub mod planner;

pub use error::{InputError, ModelError, PredictionError, Result};
pub use form::FormFields;
pub use encoder::LabelEncoder;
pub use model::{DecisionTree, ForestModel, LinearModel, RegressionModel, TreeNode};
pub use registry::{FeatureModel, ModelRegistry};
pub use calories::CaloriePrediction;
pub use macros::{MacroBreakdown, Macronutrient};
pub use workout::{ExercisePlan, ExercisePlanRequest, Gender, WorkoutGoal, WorkoutType};
pub use planner::{DailyPlan, PlanSlot, NOT_SCHEDULED};

/// Round to `decimals` places from the exact binary value, with exact ties
/// going to the even digit
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.456, 2), 0.46);
        assert_eq!(round_to(13.44, 1), 13.4);
        assert_eq!(round_to(-1.26, 1), -1.3);
    }

    #[test]
    fn test_round_to_uses_binary_value_and_even_ties() {
        // Both products land exactly on a .x5 tie in binary
        assert_eq!(round_to(15.0 * 0.35, 1), 5.2);
        assert_eq!(round_to(75.0 * 0.35, 1), 26.2);
        // Exact ties
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(2.5, 0), 2.0);
    }
}
