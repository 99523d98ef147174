//! WebAssembly module for the Maize Yield Predictor
//!
//! Provides client-side computation for the farm-details form:
//! - Farm description validation before submission
//! - Feature record preview (the input-summary view)
//! - Rainfall and temperature band constants

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validate a farm description JSON before submission
#[wasm_bindgen]
pub fn validate_farm_description(farm_json: &str) -> Result<(), JsValue> {
    let farm: FarmDescription = serde_json::from_str(farm_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid farm JSON: {}", e)))?;
    validate_farm(&farm).map_err(JsValue::from_str)
}

/// Map a farm description JSON to the feature record the model consumes
#[wasm_bindgen]
pub fn preview_feature_record(farm_json: &str) -> Result<String, JsValue> {
    let farm: FarmDescription = serde_json::from_str(farm_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid farm JSON: {}", e)))?;
    let record = map_features(&farm);
    serde_json::to_string(&record).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Millimeter constant for a rainfall band ("low" | "moderate" | "high")
#[wasm_bindgen]
pub fn rainfall_millimeters(band: &str) -> Result<i32, JsValue> {
    let level: RainfallLevel = serde_json::from_str(&format!("\"{}\"", band))
        .map_err(|_| JsValue::from_str("Unknown rainfall band"))?;
    Ok(level.millimeters())
}

/// Celsius constant for a temperature band ("cool" | "moderate" | "warm")
#[wasm_bindgen]
pub fn temperature_celsius(band: &str) -> Result<f64, JsValue> {
    let level: TemperatureLevel = serde_json::from_str(&format!("\"{}\"", band))
        .map_err(|_| JsValue::from_str("Unknown temperature band"))?;
    Ok(level.celsius())
}

/// Supported season years for the form's year selector
#[wasm_bindgen]
pub fn supported_years() -> Vec<i32> {
    SUPPORTED_YEARS.to_vec()
}
