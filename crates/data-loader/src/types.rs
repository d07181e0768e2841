//! Core domain types for the fitness dataset.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - `FitnessRecord`, one row of the flat meal/exercise dataset
//! - Categorical selections (goal, diet, meal, fitness level, BMI category)
//! - `FitnessDataset`, the immutable in-memory table with a goal index

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Type Aliases
// =============================================================================

/// Position of a record in the dataset (0-based, file order)
pub(crate) type RowId = usize;

// =============================================================================
// Column Names
// =============================================================================

pub mod columns {
    pub const GOAL: &str = "Goal";
    pub const DIET_TYPE: &str = "Diet_Type";
    pub const MEAL_TYPE: &str = "Meal_Type";
    pub const FOOD_ITEM: &str = "Food_Item";
    pub const CATEGORY: &str = "Category";
    pub const CALORIES: &str = "Calories (kcal)";
    pub const PROTEIN: &str = "Protein (g)";
    pub const CARBOHYDRATES: &str = "Carbohydrates (g)";
    pub const FAT: &str = "Fat (g)";
    pub const EXERCISE: &str = "Exercise";
    pub const CALORIES_BURNED: &str = "Calories Burned";
    pub const DURATION: &str = "Duration";
    pub const EXERCISE_INTENSITY: &str = "Exercise Intensity";
    pub const HEART_RATE: &str = "Heart Rate";

    /// Every column a `FitnessRecord` is built from
    pub const REQUIRED: [&str; 14] = [
        GOAL,
        DIET_TYPE,
        MEAL_TYPE,
        FOOD_ITEM,
        CATEGORY,
        CALORIES,
        PROTEIN,
        CARBOHYDRATES,
        FAT,
        EXERCISE,
        CALORIES_BURNED,
        DURATION,
        EXERCISE_INTENSITY,
        HEART_RATE,
    ];
}

// =============================================================================
// Dataset Row
// =============================================================================

/// One row of the dataset: a meal paired with an exercise for a goal/diet.
///
/// Nutrient columns are normalized to the unit interval. Empty numeric
/// cells are stored as `NaN`, so they never satisfy a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessRecord {
    pub goal: String,
    pub diet_type: String,
    pub meal_type: String,
    pub food_item: String,
    pub category: String,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub exercise: String,
    pub calories_burned: f64,
    pub duration: f64,
    /// Exercise intensity on a 1-10 scale
    pub intensity: f64,
    pub heart_rate: f64,
}

// =============================================================================
// Categorical Selections
// =============================================================================

/// A value that is not one of the known variants of a category
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {field} '{value}'")]
pub struct UnknownCategory {
    pub field: &'static str,
    pub value: String,
}

/// Declares a fieldless enum whose variants map to fixed dataset/form labels.
macro_rules! category_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All variants in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The label used in the dataset and in HTML forms
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCategory;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.trim() {
                    $($label => Ok($name::$variant),)+
                    other => Err(UnknownCategory {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

category_enum! {
    /// The user's stated fitness objective
    Goal, "goal" {
        Loss => "Loss",
        Gain => "Gain",
        Maintain => "Maintain",
    }
}

category_enum! {
    DietType, "diet type" {
        Balanced => "Balanced",
        LowCarb => "Low-Carb",
        HighProtein => "High-Protein",
        Vegan => "Vegan",
    }
}

category_enum! {
    MealType, "meal type" {
        Breakfast => "Breakfast",
        Lunch => "Lunch",
        Dinner => "Dinner",
        Snack => "Snack",
    }
}

category_enum! {
    FitnessLevel, "fitness level" {
        Beginner => "Beginner",
        Intermediate => "Intermediate",
        Advanced => "Advanced",
    }
}

category_enum! {
    /// Bucketed body-mass-index classification
    BmiCategory, "BMI category" {
        Underweight => "Underweight",
        Normal => "Normal",
        Overweight => "Overweight",
        Obese => "Obese",
    }
}

// =============================================================================
// FitnessDataset - The In-Memory Table
// =============================================================================

/// The whole dataset, immutable once loaded.
///
/// Records keep file order; `goal_index` maps a goal label to the row ids
/// carrying it (ascending), which the fallback rankings scan.
#[derive(Debug, Default)]
pub struct FitnessDataset {
    pub(crate) records: Vec<FitnessRecord>,
    pub(crate) goal_index: HashMap<String, Vec<RowId>>,
}

impl FitnessDataset {
    /// Creates a new, empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dataset from records already in file order
    pub fn from_records(records: Vec<FitnessRecord>) -> Self {
        let mut dataset = Self::new();
        for record in records {
            dataset.insert_record(record);
        }
        dataset
    }

    /// Append a record and update the goal index
    pub fn insert_record(&mut self, record: FitnessRecord) {
        let row_id = self.records.len();
        self.goal_index
            .entry(record.goal.clone())
            .or_default()
            .push(row_id);
        self.records.push(record);
    }

    /// All records in file order
    pub fn records(&self) -> &[FitnessRecord] {
        &self.records
    }

    /// Records whose `Goal` column equals `goal`, in file order
    pub fn records_for_goal(&self, goal: &str) -> Vec<&FitnessRecord> {
        self.goal_index
            .get(goal)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(|&id| self.records.get(id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct goals, for load-time logging
    pub fn goal_count(&self) -> usize {
        self.goal_index.len()
    }
}
