//! Predictor app handlers.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::Html;
use tracing::{debug, error};

use predictor::advice::{random_quote, random_wellness_tip};
use predictor::{DailyPlan, ExercisePlan, ExercisePlanRequest, FormFields, Macronutrient, PredictionError};

use crate::chart::{bar_chart, data_uri, donut_chart, Slice};
use crate::render::error_box;
use crate::render::predictor::*;
use crate::render::INVALID_INPUT;
use crate::state::PredictorState;

type Page = (StatusCode, Html<String>);

fn page(status: StatusCode, title: &str, heading: &str, content: &str) -> Page {
    (status, Html(layout(title, heading, content)))
}

/// Map a failed prediction to a status and the message shown under the form
fn prediction_failure(err: &PredictionError) -> (StatusCode, String) {
    match err {
        PredictionError::Input(cause) => {
            debug!("Rejected prediction input: {:?}", cause);
            (StatusCode::OK, error_box(INVALID_INPUT, &cause.to_string()))
        }
        PredictionError::Model(cause) => {
            error!("Model inference failed: {}", cause);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_box(INVALID_INPUT, "The model could not produce a prediction."),
            )
        }
    }
}

// =============================================================================
// Calories burned: GET|POST /
// =============================================================================

const CALORIES_TITLE: &str = "Calories Burned | Health & Fitness AI";
const CALORIES_HEADING: &str = "Calories Burned Prediction";

pub async fn calories_page() -> Page {
    page(StatusCode::OK, CALORIES_TITLE, CALORIES_HEADING, &calories_form())
}

pub async fn predict_calories(State(state): State<PredictorState>, Form(form): Form<FormFields>) -> Page {
    let (status, outcome) = match state.registry.predict_calories(&form) {
        Ok(prediction) => (StatusCode::OK, calories_result(&prediction)),
        Err(err) => prediction_failure(&err),
    };
    page(status, CALORIES_TITLE, CALORIES_HEADING, &(calories_form() + &outcome))
}

// =============================================================================
// Macronutrients: GET|POST /macros
// =============================================================================

const MACROS_TITLE: &str = "Macronutrient Prediction | Health & Fitness AI";
const MACROS_HEADING: &str = "Macronutrient Distribution Prediction";

pub async fn macros_page() -> Page {
    page(StatusCode::OK, MACROS_TITLE, MACROS_HEADING, &macros_form())
}

pub async fn predict_macros(State(state): State<PredictorState>, Form(form): Form<FormFields>) -> Page {
    let (status, outcome) = match state.registry.predict_macros(&form) {
        Ok(breakdown) => {
            let slices: Vec<Slice<'_>> = Macronutrient::ALL
                .iter()
                .zip(MACRO_COLORS)
                .map(|(nutrient, color)| Slice {
                    label: nutrient.label(),
                    value: breakdown.get(*nutrient),
                    color,
                })
                .collect();
            let chart = data_uri(&donut_chart(&slices));
            (StatusCode::OK, macros_result(&breakdown, &chart))
        }
        Err(err) => prediction_failure(&err),
    };
    page(status, MACROS_TITLE, MACROS_HEADING, &(macros_form() + &outcome))
}

// =============================================================================
// Exercise plan: GET|POST /exercise
// =============================================================================

const EXERCISE_TITLE: &str = "Exercise Suggestion | Health & Fitness AI";
const EXERCISE_HEADING: &str = "Exercise Duration & Type Recommendation";

pub async fn exercise_page() -> Page {
    page(StatusCode::OK, EXERCISE_TITLE, EXERCISE_HEADING, &exercise_form())
}

pub async fn suggest_exercise(Form(form): Form<FormFields>) -> Page {
    let content = match ExercisePlanRequest::from_form(&form) {
        Ok(request) => {
            let plan = ExercisePlan::from(&request);
            let bars: Vec<(&str, f64)> = plan.split.iter().map(|(kind, minutes)| (kind.as_str(), *minutes)).collect();
            let chart = bar_chart(
                "Workout Time Distribution",
                &bars,
                PLAN_BAR_COLOR,
                "Exercise Type",
                "Duration (min)",
            );
            exercise_form() + &exercise_result(&plan, &data_uri(&chart))
        }
        Err(err) => {
            debug!("Rejected exercise plan input: {:?}", err);
            exercise_form() + &error_box(PLAN_ERROR, &err.to_string())
        }
    };
    page(StatusCode::OK, EXERCISE_TITLE, EXERCISE_HEADING, &content)
}

// =============================================================================
// More: GET /more
// =============================================================================

pub async fn more_page() -> Page {
    page(
        StatusCode::OK,
        "More | Health & Fitness AI",
        "Explore More Tools & Tips",
        &more_content(random_quote(), random_wellness_tip()),
    )
}

// =============================================================================
// Planner: GET|POST /planner
// =============================================================================

const PLANNER_TITLE: &str = "Health Planner | Health & Fitness AI";
const PLANNER_HEADING: &str = "Daily Health & Wellness Planner";

pub async fn planner_page() -> Page {
    page(StatusCode::OK, PLANNER_TITLE, PLANNER_HEADING, &planner_form())
}

pub async fn build_plan(Form(form): Form<FormFields>) -> Page {
    let content = match DailyPlan::from_form(&form) {
        Ok(plan) => planner_form() + &planner_result(&plan),
        Err(err) => {
            debug!("Rejected planner input: {:?}", err);
            planner_form() + &error_box(INVALID_INPUT, &err.to_string())
        }
    };
    page(StatusCode::OK, PLANNER_TITLE, PLANNER_HEADING, &content)
}
