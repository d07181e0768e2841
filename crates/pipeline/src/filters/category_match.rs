//! Filters keeping rows whose categorical columns match the user's selection.

use crate::traits::Filter;
use data_loader::{DietType, FitnessRecord, Goal, MealType};

/// Keeps rows whose `Goal` equals the requested goal.
pub struct GoalFilter {
    goal: Goal,
}

impl GoalFilter {
    pub fn new(goal: Goal) -> Self {
        Self { goal }
    }
}

impl Filter for GoalFilter {
    fn name(&self) -> &str {
        "GoalFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a FitnessRecord>) -> Vec<&'a FitnessRecord> {
        let goal = self.goal.as_str();
        rows.into_iter().filter(|row| row.goal == goal).collect()
    }
}

/// Keeps rows whose `Diet_Type` equals the requested diet.
pub struct DietTypeFilter {
    diet_type: DietType,
}

impl DietTypeFilter {
    pub fn new(diet_type: DietType) -> Self {
        Self { diet_type }
    }
}

impl Filter for DietTypeFilter {
    fn name(&self) -> &str {
        "DietTypeFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a FitnessRecord>) -> Vec<&'a FitnessRecord> {
        let diet_type = self.diet_type.as_str();
        rows.into_iter().filter(|row| row.diet_type == diet_type).collect()
    }
}

/// Keeps rows whose `Meal_Type` equals the requested meal.
pub struct MealTypeFilter {
    meal_type: MealType,
}

impl MealTypeFilter {
    pub fn new(meal_type: MealType) -> Self {
        Self { meal_type }
    }
}

impl Filter for MealTypeFilter {
    fn name(&self) -> &str {
        "MealTypeFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a FitnessRecord>) -> Vec<&'a FitnessRecord> {
        let meal_type = self.meal_type.as_str();
        rows.into_iter().filter(|row| row.meal_type == meal_type).collect()
    }
}
