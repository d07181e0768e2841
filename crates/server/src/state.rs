//! Shared state injected into the axum handlers.

use std::sync::Arc;

use data_loader::FitnessDataset;
use predictor::ModelRegistry;

use crate::orchestrator::RecommendationOrchestrator;
use crate::session::SessionStore;

/// State of the recommendation app
#[derive(Clone)]
pub struct RecommenderState {
    pub orchestrator: RecommendationOrchestrator,
    pub sessions: Arc<SessionStore>,
    pub cookie_name: Arc<str>,
}

impl RecommenderState {
    pub fn new(dataset: Arc<FitnessDataset>, cookie_name: &str) -> Self {
        Self {
            orchestrator: RecommendationOrchestrator::new(dataset),
            sessions: Arc::new(SessionStore::new()),
            cookie_name: Arc::from(cookie_name),
        }
    }
}

/// State of the predictor app
#[derive(Clone)]
pub struct PredictorState {
    pub registry: Arc<ModelRegistry>,
}

impl PredictorState {
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }
}
