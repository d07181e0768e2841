//! # Recommendation Orchestrator
//!
//! This module coordinates one recommendation request:
//! 1. Run the meal and exercise recommenders (in parallel, on the blocking pool)
//! 2. Substitute the fallback ranking for any empty result
//! 3. Report which of the two each side used
//!
//! The dataset is shared read-only, so cloning the orchestrator is cheap and
//! concurrent requests need no coordination.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use data_loader::{BmiCategory, DietType, FitnessDataset, FitnessLevel, Goal, MealType};
use pipeline::{
    fallback_exercises, fallback_meals, recommend_exercises, recommend_meals,
    ExerciseRecommendation, MealRecommendation,
};
use predictor::form::{category_field, FormFields};
use predictor::InputError;

/// Form field names of the recommendation form
pub mod fields {
    pub const GOAL: &str = "goal";
    pub const DIET_TYPE: &str = "diet_type";
    pub const MEAL_TYPE: &str = "meal_type";
    pub const FITNESS_LEVEL: &str = "fitness_level";
    pub const BMI_CATEGORY: &str = "bmi_category";
    pub const ACTION: &str = "action";
}

/// The user's selections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub goal: Goal,
    pub diet_type: DietType,
    pub meal_type: MealType,
    pub fitness_level: FitnessLevel,
    pub bmi_category: BmiCategory,
}

impl RecommendationRequest {
    pub fn from_form(form: &FormFields) -> std::result::Result<Self, InputError> {
        Ok(Self {
            goal: category_field(form, fields::GOAL)?,
            diet_type: category_field(form, fields::DIET_TYPE)?,
            meal_type: category_field(form, fields::MEAL_TYPE)?,
            fitness_level: category_field(form, fields::FITNESS_LEVEL)?,
            bmi_category: category_field(form, fields::BMI_CATEGORY)?,
        })
    }
}

/// Rows from the primary recommender, or from the fallback ranking when the
/// primary one found nothing
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Matched(Vec<T>),
    Fallback(Vec<T>),
}

impl<T> Outcome<T> {
    pub fn rows(&self) -> &[T] {
        match self {
            Outcome::Matched(rows) | Outcome::Fallback(rows) => rows,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub meals: Outcome<MealRecommendation>,
    pub exercises: Outcome<ExerciseRecommendation>,
}

/// Runs both recommenders against the shared dataset
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    dataset: Arc<FitnessDataset>,
}

impl RecommendationOrchestrator {
    pub fn new(dataset: Arc<FitnessDataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &FitnessDataset {
        &self.dataset
    }

    /// Main entry point: meals and exercises for one request
    pub async fn recommend(&self, request: &RecommendationRequest) -> Result<Recommendations> {
        let start_time = Instant::now();
        let request = *request;

        let (meals, exercises) = tokio::join!(
            tokio::task::spawn_blocking({
                let dataset = self.dataset.clone();
                move || meals_for(&dataset, &request)
            }),
            tokio::task::spawn_blocking({
                let dataset = self.dataset.clone();
                move || exercises_for(&dataset, &request)
            })
        );

        let meals = meals.context("Meal recommender task panicked")?;
        let exercises = exercises.context("Exercise recommender task panicked")?;

        info!(
            "Recommended {} meals (fallback: {}) and {} exercises (fallback: {}) for goal {} in {:.2?}",
            meals.rows().len(),
            meals.is_fallback(),
            exercises.rows().len(),
            exercises.is_fallback(),
            request.goal,
            start_time.elapsed()
        );
        Ok(Recommendations { meals, exercises })
    }
}

fn meals_for(dataset: &FitnessDataset, request: &RecommendationRequest) -> Outcome<MealRecommendation> {
    let meals = recommend_meals(dataset, request.goal, request.diet_type, request.meal_type);
    if meals.is_empty() {
        debug!("No meals matched {:?}, using fallback ranking", request);
        Outcome::Fallback(fallback_meals(dataset, request.goal))
    } else {
        Outcome::Matched(meals)
    }
}

fn exercises_for(
    dataset: &FitnessDataset,
    request: &RecommendationRequest,
) -> Outcome<ExerciseRecommendation> {
    let exercises = recommend_exercises(
        dataset,
        request.goal,
        request.fitness_level,
        request.bmi_category,
    );
    if exercises.is_empty() {
        debug!("No exercises matched {:?}, using fallback ranking", request);
        Outcome::Fallback(fallback_exercises(dataset, request.goal))
    } else {
        Outcome::Matched(exercises)
    }
}
