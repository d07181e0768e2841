//! Macronutrient breakdown predicted for a meal.

use serde::Serialize;

use crate::error::{ModelError, Result};
use crate::round_to;

/// Form field names of the macronutrient inputs
pub mod fields {
    pub const CALORIES: &str = "Calories (kcal)";
    pub const MEAL_TYPE: &str = "Meal_Type";
    pub const DIET_TYPE: &str = "Diet_Type";
    pub const BMI_CATEGORY: &str = "BMI_Category";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Macronutrient {
    Protein,
    Carbohydrates,
    Fat,
}

impl Macronutrient {
    /// Model output order
    pub const ALL: [Macronutrient; 3] = [
        Macronutrient::Protein,
        Macronutrient::Carbohydrates,
        Macronutrient::Fat,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Macronutrient::Protein => "Protein (g)",
            Macronutrient::Carbohydrates => "Carbohydrates (g)",
            Macronutrient::Fat => "Fat (g)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroBreakdown {
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
}

impl MacroBreakdown {
    /// Build from raw model outputs (protein, carbohydrates, fat), rounded to 2 decimals
    pub fn from_outputs(outputs: &[f64]) -> Result<Self> {
        match outputs {
            [protein, carbohydrates, fat] => Ok(Self {
                protein: round_to(*protein, 2),
                carbohydrates: round_to(*carbohydrates, 2),
                fat: round_to(*fat, 2),
            }),
            _ => Err(ModelError::OutputCountMismatch {
                expected: Macronutrient::ALL.len(),
                found: outputs.len(),
            }),
        }
    }

    pub fn get(&self, nutrient: Macronutrient) -> f64 {
        match nutrient {
            Macronutrient::Protein => self.protein,
            Macronutrient::Carbohydrates => self.carbohydrates,
            Macronutrient::Fat => self.fat,
        }
    }

    /// `(nutrient, grams)` in output order
    pub fn entries(&self) -> [(Macronutrient, f64); 3] {
        Macronutrient::ALL.map(|n| (n, self.get(n)))
    }

    /// The largest component; the earlier one wins a tie
    pub fn dominant(&self) -> Macronutrient {
        let mut best = (Macronutrient::Protein, self.protein);
        for (nutrient, value) in self.entries() {
            if value > best.1 {
                best = (nutrient, value);
            }
        }
        best.0
    }

    pub fn summary(&self) -> String {
        let main = self.dominant().label().to_lowercase();
        format!(
            "This meal is primarily composed of {main}, making it suitable for those needing higher {main} intake."
        )
    }
}
