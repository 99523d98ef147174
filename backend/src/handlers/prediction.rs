//! HTTP handlers for yield prediction endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use validator::Validate;

use shared::{map_features, validate_season_year, FarmDescription, FeatureRecord, PredictedYield};

use crate::error::{AppError, AppResult};
use crate::services::prediction::PredictionService;
use crate::AppState;

/// Response for a yield prediction
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub predicted_yield: PredictedYield,
    /// The exact record sent to the model, for the input-summary view
    pub features: FeatureRecord,
}

/// Predict maize yield from a farm description
pub async fn predict_yield(
    State(state): State<AppState>,
    Json(input): Json<FarmDescription>,
) -> AppResult<Json<PredictionResponse>> {
    input
        .validate()
        .map_err(|errors| AppError::from_validation_errors(&errors))?;
    validate_season_year(input.season_year).map_err(|message| AppError::Validation {
        field: "season_year".to_string(),
        message: message.to_string(),
    })?;

    let features = map_features(&input);
    let service = PredictionService::new(state.model.clone());
    let predicted_yield = service.predict(&features)?;

    tracing::debug!(
        "Predicted {:.0} kg/ha for {} maize in {}",
        predicted_yield.kg_per_ha,
        features.maize_type,
        features.region
    );

    Ok(Json(PredictionResponse {
        predicted_yield,
        features,
    }))
}

/// Model metadata response
#[derive(Debug, Serialize)]
pub struct ModelInfoResponse {
    pub model_version: String,
    pub feature_names: Vec<String>,
    pub trees: usize,
}

/// Describe the loaded model artifact
pub async fn get_model_info(State(state): State<AppState>) -> Json<ModelInfoResponse> {
    Json(ModelInfoResponse {
        model_version: state.model.version().to_string(),
        feature_names: state.model.feature_names().to_vec(),
        trees: state.model.tree_count(),
    })
}
