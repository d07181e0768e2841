//! Axum router configuration for both apps

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{predictor, recommender};
use crate::state::{PredictorState, RecommenderState};

/// Create the recommendation app router
pub fn create_recommender_router(state: RecommenderState) -> Router {
    Router::new()
        .route("/", get(recommender::show_home).post(recommender::submit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create the predictor app router
pub fn create_predictor_router(state: PredictorState) -> Router {
    Router::new()
        .route("/", get(predictor::calories_page).post(predictor::predict_calories))
        .route("/macros", get(predictor::macros_page).post(predictor::predict_macros))
        .route("/exercise", get(predictor::exercise_page).post(predictor::suggest_exercise))
        .route("/more", get(predictor::more_page))
        .route("/planner", get(predictor::planner_page).post(predictor::build_plan))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
