//! Yield prediction service

use std::sync::Arc;

use shared::{FeatureRecord, PredictedYield};

use crate::error::AppResult;
use crate::model::{ModelError, YieldModel};

/// Prediction service owning the loaded model handle
#[derive(Clone)]
pub struct PredictionService {
    model: Arc<YieldModel>,
}

impl PredictionService {
    pub fn new(model: Arc<YieldModel>) -> Self {
        Self { model }
    }

    /// Run inference on a mapped feature record
    ///
    /// Extrapolation outside the training range can push the forest
    /// below zero; such outputs are floored at zero. A non-finite
    /// output is surfaced as a prediction failure.
    pub fn predict(&self, record: &FeatureRecord) -> AppResult<PredictedYield> {
        let raw = self.model.predict(record)?;

        if !raw.is_finite() {
            return Err(
                ModelError::Malformed(format!("model produced non-finite yield {}", raw)).into(),
            );
        }

        let kg_per_ha = if raw < 0.0 {
            tracing::warn!("Clamping negative yield prediction {} to zero", raw);
            0.0
        } else {
            raw
        };

        Ok(PredictedYield::new(kg_per_ha))
    }
}
