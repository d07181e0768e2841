//! Request handlers for both apps.

pub mod predictor;
pub mod recommender;
