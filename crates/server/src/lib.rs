//! Server crate for the FitRecs web apps.
//!
//! This crate contains the orchestrator that coordinates the recommenders,
//! the per-session history, HTML and chart rendering, and the axum routers
//! of the recommendation app and the predictor app.

pub mod chart;
pub mod config;
pub mod handlers;
pub mod orchestrator;
pub mod render;
pub mod routing;
pub mod session;
pub mod startup;
pub mod state;

pub use config::ServerConfig;
pub use orchestrator::{Outcome, RecommendationOrchestrator, RecommendationRequest, Recommendations};
pub use routing::{create_predictor_router, create_recommender_router};
pub use session::{SessionHistory, SessionStore, Snapshot};
pub use startup::{start_predictor, start_recommender};
pub use state::{PredictorState, RecommenderState};
