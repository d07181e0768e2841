//! Filter capping a normalized nutrient column.
//!
//! Meal recommendations only keep light dishes: both calories and
//! carbohydrates must stay strictly below fixed normalized ceilings.

use crate::filters::Threshold;
use crate::traits::Filter;
use data_loader::FitnessRecord;

/// Normalized nutrient columns a ceiling can apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nutrient {
    Calories,
    Carbohydrates,
}

impl Nutrient {
    fn value(&self, row: &FitnessRecord) -> f64 {
        match self {
            Nutrient::Calories => row.calories,
            Nutrient::Carbohydrates => row.carbohydrates,
        }
    }
}

/// Keeps rows whose nutrient value is strictly below `ceiling`.
pub struct NutrientCeilingFilter {
    nutrient: Nutrient,
    threshold: Threshold,
}

impl NutrientCeilingFilter {
    pub fn new(nutrient: Nutrient, ceiling: f64) -> Self {
        Self {
            nutrient,
            threshold: Threshold::Below(ceiling),
        }
    }
}

impl Filter for NutrientCeilingFilter {
    fn name(&self) -> &str {
        "NutrientCeilingFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a FitnessRecord>) -> Vec<&'a FitnessRecord> {
        rows.into_iter()
            .filter(|row| self.threshold.admits(self.nutrient.value(row)))
            .collect()
    }
}
