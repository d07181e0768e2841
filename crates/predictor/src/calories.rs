//! Calories-burned prediction and its interpretation.

use serde::Serialize;

use crate::round_to;

/// Form field names of the calories-burned inputs, in display order
pub mod fields {
    pub const INTENSITY: &str = "Exercise Intensity";
    pub const DURATION: &str = "Duration";
    pub const HEART_RATE: &str = "Heart Rate";
    pub const BMI_CATEGORY: &str = "BMI_Category";
    pub const FITNESS_LEVEL: &str = "Fitness_Level";
}

/// Selectable exercise intensities
pub const INTENSITY_LEVELS: std::ops::RangeInclusive<u8> = 1..=10;

/// Normalized duration / heart-rate choices: 0.05 to 1.0 in steps of 0.05
pub fn unit_steps() -> Vec<f64> {
    (1..=20).map(|i| round_to(f64::from(i) / 20.0, 2)).collect()
}

/// A calories-burned prediction, rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CaloriePrediction {
    pub value: f64,
}

impl CaloriePrediction {
    pub fn from_raw(raw: f64) -> Self {
        Self {
            value: round_to(raw, 2),
        }
    }

    /// Interpretation of the normalized burn
    pub fn summary(&self) -> &'static str {
        if self.value < 0.2 {
            "Very low calorie burn — consider increasing exercise intensity or duration."
        } else if self.value < 0.5 {
            "Moderate calorie burn — suitable for light workouts or warmups."
        } else if self.value < 0.8 {
            "High calorie burn — ideal for improving stamina and fitness."
        } else {
            "Very high calorie burn — excellent for intense fat-burning workouts."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_thresholds() {
        assert!(CaloriePrediction::from_raw(0.1).summary().starts_with("Very low"));
        assert!(CaloriePrediction::from_raw(0.2).summary().starts_with("Moderate"));
        assert!(CaloriePrediction::from_raw(0.79).summary().starts_with("High"));
        assert!(CaloriePrediction::from_raw(0.8).summary().starts_with("Very high"));
    }

    #[test]
    fn test_rounding_applies_before_summary() {
        // 0.199 rounds up to 0.2, which is no longer "very low"
        let prediction = CaloriePrediction::from_raw(0.199);
        assert_eq!(prediction.value, 0.2);
        assert!(prediction.summary().starts_with("Moderate"));
    }

    #[test]
    fn test_unit_steps() {
        let steps = unit_steps();
        assert_eq!(steps.len(), 20);
        assert_eq!(steps[0], 0.05);
        assert_eq!(steps[2], 0.15);
        assert_eq!(steps[19], 1.0);
    }
}
