//! Pipeline for filtering and ranking dataset rows into recommendations.
//!
//! This crate provides:
//! - Filter trait and implementations for row filtering
//! - FilterPipeline for composing filters
//! - The meal and exercise recommenders with their fallback rankings
//!
//! ## Architecture
//! A recommendation is computed in stages:
//! 1. Filters remove rows that don't satisfy a selection (AND semantics)
//! 2. Surviving rows are deduplicated on their key column
//! 3. The first few rows are projected to output columns
//!
//! When stage 1 leaves nothing, the caller asks for a fallback ranking of
//! all rows for the goal instead.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{recommend_meals, fallback_meals};
//!
//! let meals = recommend_meals(&dataset, Goal::Loss, DietType::Vegan, MealType::Lunch);
//! let meals = if meals.is_empty() { fallback_meals(&dataset, Goal::Loss) } else { meals };
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod recommend;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use recommend::{
    exercise_pipeline, fallback_exercises, fallback_meals, format_number, meal_pipeline,
    recommend_exercises, recommend_meals, ExerciseRecommendation, MealRecommendation, TableRow,
    MAX_FALLBACK, MAX_RECOMMENDATIONS, MEAL_CALORIE_CEILING, MEAL_CARB_CEILING,
};

#[cfg(test)]
pub(crate) mod test_support {
    use data_loader::FitnessRecord;

    pub fn record(goal: &str, food_item: &str) -> FitnessRecord {
        FitnessRecord {
            goal: goal.to_string(),
            diet_type: "Balanced".to_string(),
            meal_type: "Lunch".to_string(),
            food_item: food_item.to_string(),
            category: "Main".to_string(),
            calories: 0.2,
            protein: 0.3,
            carbohydrates: 0.1,
            fat: 0.1,
            exercise: "Walking".to_string(),
            calories_burned: 200.0,
            duration: 30.0,
            intensity: 3.0,
            heart_rate: 0.5,
        }
    }

    pub fn meal(
        goal: &str,
        diet_type: &str,
        meal_type: &str,
        food_item: &str,
        calories: f64,
        carbohydrates: f64,
    ) -> FitnessRecord {
        FitnessRecord {
            diet_type: diet_type.to_string(),
            meal_type: meal_type.to_string(),
            calories,
            carbohydrates,
            ..record(goal, food_item)
        }
    }

    pub fn exercise(name: &str, calories_burned: f64, duration: f64, intensity: f64) -> FitnessRecord {
        FitnessRecord {
            exercise: name.to_string(),
            calories_burned,
            duration,
            intensity,
            ..record("Loss", "Salad")
        }
    }
}
