//! Validation utilities for the Maize Yield Predictor
//!
//! Range enforcement lives at the input-collection boundary: the form
//! (via WASM) and the HTTP handler both call into here before anything
//! reaches the feature mapper.

use validator::Validate;

use crate::models::{FarmDescription, SUPPORTED_YEARS};

/// Validate that the season year is one the model was trained on
pub fn validate_season_year(year: i32) -> Result<(), &'static str> {
    if SUPPORTED_YEARS.contains(&year) {
        Ok(())
    } else {
        Err("Season year is outside the supported range")
    }
}

/// Validate a full farm description before mapping
///
/// Combines the supported-year check with the derived numeric range
/// constraints on `FarmDescription`.
pub fn validate_farm(farm: &FarmDescription) -> Result<(), &'static str> {
    validate_season_year(farm.season_year)?;
    if farm.validate().is_err() {
        return Err("One or more numeric fields are out of range");
    }
    Ok(())
}
