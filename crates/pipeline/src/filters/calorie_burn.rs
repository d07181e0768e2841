//! Filter constraining calories burned by BMI category.

use crate::filters::Threshold;
use crate::traits::Filter;
use data_loader::{BmiCategory, FitnessRecord};

/// Keeps rows whose `Calories Burned` satisfies the BMI category's bound.
///
/// Obese users get high-burn exercises (>= 300), underweight users
/// low-burn ones (<= 250); other categories are unconstrained.
pub struct CalorieBurnFilter {
    threshold: Threshold,
}

impl CalorieBurnFilter {
    pub const OBESE_MIN_BURN: f64 = 300.0;
    pub const UNDERWEIGHT_MAX_BURN: f64 = 250.0;

    pub fn new(threshold: Threshold) -> Self {
        Self { threshold }
    }

    /// The calorie-burn constraint for `bmi_category`, if any
    pub fn for_bmi(bmi_category: BmiCategory) -> Option<Self> {
        match bmi_category {
            BmiCategory::Obese => Some(Self::new(Threshold::AtLeast(Self::OBESE_MIN_BURN))),
            BmiCategory::Underweight => {
                Some(Self::new(Threshold::AtMost(Self::UNDERWEIGHT_MAX_BURN)))
            }
            BmiCategory::Normal | BmiCategory::Overweight => None,
        }
    }
}

impl Filter for CalorieBurnFilter {
    fn name(&self) -> &str {
        "CalorieBurnFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a FitnessRecord>) -> Vec<&'a FitnessRecord> {
        rows.into_iter()
            .filter(|row| self.threshold.admits(row.calories_burned))
            .collect()
    }
}
