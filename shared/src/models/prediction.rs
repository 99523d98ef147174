//! Yield prediction result models

use serde::{Deserialize, Serialize};

/// A single yield estimate in kilograms per hectare
///
/// Always finite and non-negative by the time it leaves the prediction
/// service. Rounding and thousands separators are left to the form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PredictedYield {
    pub kg_per_ha: f64,
}

impl PredictedYield {
    pub fn new(kg_per_ha: f64) -> Self {
        Self { kg_per_ha }
    }
}
