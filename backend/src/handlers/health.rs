//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub model: ModelStatus,
}

#[derive(Serialize)]
pub struct ModelStatus {
    pub loaded: bool,
    pub model_version: String,
    pub trees: usize,
}

/// Health check endpoint handler
///
/// The model is loaded before the listener binds, so a serving process
/// always reports it as loaded; the payload mainly identifies which
/// artifact is live.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        model: ModelStatus {
            loaded: true,
            model_version: state.model.version().to_string(),
            trees: state.model.tree_count(),
        },
    })
}
