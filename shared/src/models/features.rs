//! Feature schema for the trained yield model
//!
//! `FeatureRecord` is the hard contract with the model artifact: field
//! names, order, and types must match the columns the model was trained
//! on exactly, or inference either fails or silently produces a wrong
//! number. The serde renames below are the training column names.

use serde::{Deserialize, Serialize};

use crate::models::farm::FarmDescription;

/// Training columns, in the order the model expects them
pub const FEATURE_NAMES: [&str; 12] = [
    "Year",
    "Maize_Type",
    "Region",
    "Soil_Quality",
    "Fertilizer_Type",
    "Irrigated",
    "Crop_Rotation",
    "Farmer_Experience",
    "Area_ha",
    "Rainfall_mm",
    "Avg_Temp_C",
    "Fertilizer_kg_ha",
];

/// The subset of columns carrying categorical labels
pub const CATEGORICAL_FEATURES: [&str; 4] =
    ["Maize_Type", "Region", "Soil_Quality", "Fertilizer_Type"];

/// One row of model input
///
/// Booleans are already coerced to 0/1 here; categorical fields carry
/// the training-data labels, not the wire-format enum values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Maize_Type")]
    pub maize_type: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Soil_Quality")]
    pub soil_quality: String,
    #[serde(rename = "Fertilizer_Type")]
    pub fertilizer_type: String,
    #[serde(rename = "Irrigated")]
    pub irrigated: i32,
    #[serde(rename = "Crop_Rotation")]
    pub crop_rotation: i32,
    #[serde(rename = "Farmer_Experience")]
    pub farmer_experience: i32,
    #[serde(rename = "Area_ha")]
    pub area_ha: f64,
    #[serde(rename = "Rainfall_mm")]
    pub rainfall_mm: i32,
    #[serde(rename = "Avg_Temp_C")]
    pub avg_temp_c: f64,
    #[serde(rename = "Fertilizer_kg_ha")]
    pub fertilizer_kg_ha: f64,
}

/// A single feature value as the model runtime consumes it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue<'a> {
    Int(i64),
    Float(f64),
    Label(&'a str),
}

impl FeatureRecord {
    /// All twelve fields, paired with their column names, in schema order
    pub fn fields(&self) -> [(&'static str, FeatureValue<'_>); 12] {
        [
            ("Year", FeatureValue::Int(self.year as i64)),
            ("Maize_Type", FeatureValue::Label(&self.maize_type)),
            ("Region", FeatureValue::Label(&self.region)),
            ("Soil_Quality", FeatureValue::Label(&self.soil_quality)),
            ("Fertilizer_Type", FeatureValue::Label(&self.fertilizer_type)),
            ("Irrigated", FeatureValue::Int(self.irrigated as i64)),
            ("Crop_Rotation", FeatureValue::Int(self.crop_rotation as i64)),
            (
                "Farmer_Experience",
                FeatureValue::Int(self.farmer_experience as i64),
            ),
            ("Area_ha", FeatureValue::Float(self.area_ha)),
            ("Rainfall_mm", FeatureValue::Int(self.rainfall_mm as i64)),
            ("Avg_Temp_C", FeatureValue::Float(self.avg_temp_c)),
            (
                "Fertilizer_kg_ha",
                FeatureValue::Float(self.fertilizer_kg_ha),
            ),
        ]
    }
}

/// Translate a farm description into the model's feature schema
///
/// Deterministic and side-effect free. Numeric ranges are the caller's
/// contract and are not re-checked here.
pub fn map_features(farm: &FarmDescription) -> FeatureRecord {
    FeatureRecord {
        year: farm.season_year,
        maize_type: farm.maize_type.as_label().to_string(),
        region: farm.region.as_label().to_string(),
        soil_quality: farm.soil_quality.as_label().to_string(),
        fertilizer_type: farm.fertilizer_type.as_label().to_string(),
        irrigated: farm.irrigated as i32,
        crop_rotation: farm.crop_rotation as i32,
        farmer_experience: farm.farmer_experience_years,
        area_ha: farm.area_ha,
        rainfall_mm: farm.rainfall_level.millimeters(),
        avg_temp_c: farm.temperature_level.celsius(),
        fertilizer_kg_ha: farm.fertilizer_kg_ha,
    }
}
