//! Meal and exercise recommenders.
//!
//! Both recommenders are pure functions over an immutable dataset:
//! 1. Build a FilterPipeline from the user's selections
//! 2. Run it over every row, in file order
//! 3. Deduplicate on the key column (first occurrence wins)
//! 4. Keep at most `MAX_RECOMMENDATIONS` rows, projected to output columns
//!
//! An empty result is not an error. Callers substitute the fallback rankings
//! (`fallback_meals`, `fallback_exercises`) in that case.

use std::cmp::Ordering;
use std::collections::HashSet;

use data_loader::{
    columns, BmiCategory, DietType, FitnessDataset, FitnessLevel, FitnessRecord, Goal, MealType,
};

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{
    CalorieBurnFilter, DietTypeFilter, DurationFilter, GoalFilter, IntensityBandFilter,
    MealTypeFilter, Nutrient, NutrientCeilingFilter,
};

/// Maximum rows returned by a primary recommendation
pub const MAX_RECOMMENDATIONS: usize = 5;
/// Maximum rows returned by a fallback ranking
pub const MAX_FALLBACK: usize = 3;
/// Normalized calorie ceiling for recommended meals (exclusive)
pub const MEAL_CALORIE_CEILING: f64 = 0.35;
/// Normalized carbohydrate ceiling for recommended meals (exclusive)
pub const MEAL_CARB_CEILING: f64 = 0.3;

// =============================================================================
// Output projections
// =============================================================================

/// A row rendered as a table: fixed column headers plus formatted cells
pub trait TableRow {
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// Meal columns of a recommended row
#[derive(Debug, Clone, PartialEq)]
pub struct MealRecommendation {
    pub food_item: String,
    pub category: String,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
}

impl From<&FitnessRecord> for MealRecommendation {
    fn from(row: &FitnessRecord) -> Self {
        Self {
            food_item: row.food_item.clone(),
            category: row.category.clone(),
            calories: row.calories,
            protein: row.protein,
            carbohydrates: row.carbohydrates,
            fat: row.fat,
        }
    }
}

impl TableRow for MealRecommendation {
    const COLUMNS: &'static [&'static str] = &[
        columns::FOOD_ITEM,
        columns::CATEGORY,
        columns::CALORIES,
        columns::PROTEIN,
        columns::CARBOHYDRATES,
        columns::FAT,
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.food_item.clone(),
            self.category.clone(),
            format_number(self.calories),
            format_number(self.protein),
            format_number(self.carbohydrates),
            format_number(self.fat),
        ]
    }
}

/// Exercise columns of a recommended row
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseRecommendation {
    pub exercise: String,
    pub calories_burned: f64,
    pub duration: f64,
    pub intensity: f64,
    pub heart_rate: f64,
}

impl From<&FitnessRecord> for ExerciseRecommendation {
    fn from(row: &FitnessRecord) -> Self {
        Self {
            exercise: row.exercise.clone(),
            calories_burned: row.calories_burned,
            duration: row.duration,
            intensity: row.intensity,
            heart_rate: row.heart_rate,
        }
    }
}

impl TableRow for ExerciseRecommendation {
    const COLUMNS: &'static [&'static str] = &[
        columns::EXERCISE,
        columns::CALORIES_BURNED,
        columns::DURATION,
        columns::EXERCISE_INTENSITY,
        columns::HEART_RATE,
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.exercise.clone(),
            format_number(self.calories_burned),
            format_number(self.duration),
            format_number(self.intensity),
            format_number(self.heart_rate),
        ]
    }
}

/// Whole numbers keep one decimal ("300.0"), others print in full.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

// =============================================================================
// Pipelines
// =============================================================================

/// The conjunction of meal predicates for a selection
pub fn meal_pipeline(goal: Goal, diet_type: DietType, meal_type: MealType) -> FilterPipeline {
    FilterPipeline::new()
        .add_filter(GoalFilter::new(goal))
        .add_filter(DietTypeFilter::new(diet_type))
        .add_filter(MealTypeFilter::new(meal_type))
        .add_filter(NutrientCeilingFilter::new(Nutrient::Calories, MEAL_CALORIE_CEILING))
        .add_filter(NutrientCeilingFilter::new(Nutrient::Carbohydrates, MEAL_CARB_CEILING))
}

/// The exercise decision table for a selection.
///
/// Exercises are not matched on the `Goal` column; the goal only sets the
/// duration constraint.
pub fn exercise_pipeline(
    goal: Goal,
    fitness_level: FitnessLevel,
    bmi_category: BmiCategory,
) -> FilterPipeline {
    FilterPipeline::new()
        .add_filter(IntensityBandFilter::new(fitness_level))
        .add_optional_filter(DurationFilter::for_goal(goal))
        .add_optional_filter(CalorieBurnFilter::for_bmi(bmi_category))
}

/// Keep the first row for each key, up to `limit` rows
fn distinct_by<'a>(
    rows: impl IntoIterator<Item = &'a FitnessRecord>,
    key: impl Fn(&'a FitnessRecord) -> &'a str,
    limit: usize,
) -> Vec<&'a FitnessRecord> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|&row| seen.insert(key(row)))
        .take(limit)
        .collect()
}

// =============================================================================
// Recommenders
// =============================================================================

/// Up to 5 distinct meals matching goal, diet and meal type that are light in
/// calories and carbohydrates.
pub fn recommend_meals(
    dataset: &FitnessDataset,
    goal: Goal,
    diet_type: DietType,
    meal_type: MealType,
) -> Vec<MealRecommendation> {
    let kept = meal_pipeline(goal, diet_type, meal_type).apply(dataset.records().iter().collect());
    distinct_by(kept, |row| row.food_item.as_str(), MAX_RECOMMENDATIONS)
        .into_iter()
        .map(MealRecommendation::from)
        .collect()
}

/// Up to 5 distinct exercises fitting the fitness level, goal and BMI category.
pub fn recommend_exercises(
    dataset: &FitnessDataset,
    goal: Goal,
    fitness_level: FitnessLevel,
    bmi_category: BmiCategory,
) -> Vec<ExerciseRecommendation> {
    let kept = exercise_pipeline(goal, fitness_level, bmi_category)
        .apply(dataset.records().iter().collect());
    distinct_by(kept, |row| row.exercise.as_str(), MAX_RECOMMENDATIONS)
        .into_iter()
        .map(ExerciseRecommendation::from)
        .collect()
}

// =============================================================================
// Fallback rankings
// =============================================================================

/// Ascending order with NaN last
fn ascending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Descending order with NaN last
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        _ => ascending(a, b),
    }
}

/// Top 3 distinct meals for the goal: protein descending, then carbohydrates
/// ascending. The sort is stable, so ties keep file order.
pub fn fallback_meals(dataset: &FitnessDataset, goal: Goal) -> Vec<MealRecommendation> {
    let mut rows = dataset.records_for_goal(goal.as_str());
    rows.sort_by(|a, b| {
        descending(a.protein, b.protein).then_with(|| ascending(a.carbohydrates, b.carbohydrates))
    });

    distinct_by(rows, |row| row.food_item.as_str(), MAX_FALLBACK)
        .into_iter()
        .map(MealRecommendation::from)
        .collect()
}

/// Top 3 distinct exercises for the goal by calories burned, descending.
pub fn fallback_exercises(dataset: &FitnessDataset, goal: Goal) -> Vec<ExerciseRecommendation> {
    let mut rows = dataset.records_for_goal(goal.as_str());
    rows.sort_by(|a, b| descending(a.calories_burned, b.calories_burned));

    distinct_by(rows, |row| row.exercise.as_str(), MAX_FALLBACK)
        .into_iter()
        .map(ExerciseRecommendation::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{exercise, meal};

    #[test]
    fn test_distinct_by_keeps_first() {
        let rows = [
            meal("Loss", "Vegan", "Lunch", "Tofu", 0.1, 0.1),
            meal("Loss", "Vegan", "Lunch", "Tofu", 0.2, 0.2),
            meal("Loss", "Vegan", "Lunch", "Beans", 0.3, 0.1),
        ];

        let kept = distinct_by(rows.iter(), |r| r.food_item.as_str(), 5);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].calories, 0.1);
        assert_eq!(kept[1].food_item, "Beans");
    }

    #[test]
    fn test_distinct_by_limit_applies_after_dedup() {
        let rows = [
            exercise("Run", 300.0, 40.0, 5.0),
            exercise("Run", 310.0, 40.0, 5.0),
            exercise("Swim", 320.0, 40.0, 5.0),
        ];

        let kept = distinct_by(rows.iter(), |r| r.exercise.as_str(), 2);
        let names: Vec<_> = kept.iter().map(|r| r.exercise.as_str()).collect();
        assert_eq!(names, vec!["Run", "Swim"]);
    }

    #[test]
    fn test_descending_puts_nan_last() {
        let mut values = vec![0.2, f64::NAN, 0.9, 0.5];
        values.sort_by(|a, b| descending(*a, *b));
        assert_eq!(&values[..3], &[0.9, 0.5, 0.2]);
        assert!(values[3].is_nan());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(300.0), "300.0");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_meal_projection_columns() {
        let row = meal("Loss", "Vegan", "Lunch", "Tofu", 0.2, 0.1);
        let projected = MealRecommendation::from(&row);
        assert_eq!(projected.cells().len(), MealRecommendation::COLUMNS.len());
        assert_eq!(projected.cells()[0], "Tofu");
    }
}
