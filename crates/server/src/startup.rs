//! Loading state and serving the apps.
//!
//! Everything a handler needs is loaded here, before the listener is bound,
//! so a missing dataset or artifact stops the process at startup.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use data_loader::FitnessDataset;
use predictor::ModelRegistry;

use crate::config::ServerConfig;
use crate::routing::{create_predictor_router, create_recommender_router};
use crate::state::{PredictorState, RecommenderState};

pub fn load_recommender_state(config: &ServerConfig) -> Result<RecommenderState> {
    let dataset = FitnessDataset::load_from_file(&config.dataset_path).with_context(|| {
        format!("Failed to load dataset from {}", config.dataset_path.display())
    })?;
    Ok(RecommenderState::new(Arc::new(dataset), &config.session_cookie))
}

pub fn load_predictor_state(config: &ServerConfig) -> Result<PredictorState> {
    let registry = ModelRegistry::load(&config.artifacts_dir).with_context(|| {
        format!("Failed to load model artifacts from {}", config.artifacts_dir.display())
    })?;
    Ok(PredictorState::new(Arc::new(registry)))
}

/// Bind `addr` and serve `app` until the server stops
pub async fn serve(addr: SocketAddr, app: Router) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")
}

/// Start the recommendation app
pub async fn start_recommender(config: ServerConfig) -> Result<()> {
    info!("Starting recommendation app on {}", config.bind_addr);
    let state = load_recommender_state(&config)?;
    serve(config.bind_addr, create_recommender_router(state)).await
}

/// Start the predictor app
pub async fn start_predictor(config: ServerConfig) -> Result<()> {
    info!("Starting predictor app on {}", config.bind_addr);
    let state = load_predictor_state(&config)?;
    serve(config.bind_addr, create_predictor_router(state)).await
}
