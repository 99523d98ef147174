//! Farm description models
//!
//! One `FarmDescription` is built per form submission and discarded after
//! the prediction is rendered. Every categorical field is a closed enum;
//! `as_label()` returns the exact label the yield model was trained on.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Season years the model was trained on
pub const SUPPORTED_YEARS: &[i32] = &[2023, 2024, 2025];

/// Administrative region of the farm
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    North,
    Central,
    South,
}

impl Region {
    pub fn as_label(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::Central => "Central",
            Region::South => "South",
        }
    }
}

/// Maize variety planted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MaizeType {
    Local,
    Hybrid,
    Opv,
}

impl MaizeType {
    pub fn as_label(&self) -> &'static str {
        match self {
            MaizeType::Local => "Local",
            MaizeType::Hybrid => "Hybrid",
            MaizeType::Opv => "OPV",
        }
    }
}

/// Assessed soil quality of the plot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilQuality {
    Poor,
    Average,
    Good,
    Excellent,
}

impl SoilQuality {
    pub fn as_label(&self) -> &'static str {
        match self {
            SoilQuality::Poor => "Poor",
            SoilQuality::Average => "Average",
            SoilQuality::Good => "Good",
            SoilQuality::Excellent => "Excellent",
        }
    }
}

/// Fertilizer regime applied during the season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FertilizerType {
    Organic,
    Inorganic,
    Mixed,
}

impl FertilizerType {
    pub fn as_label(&self) -> &'static str {
        match self {
            FertilizerType::Organic => "Organic",
            FertilizerType::Inorganic => "Inorganic",
            FertilizerType::Mixed => "Mixed",
        }
    }
}

/// Seasonal rainfall level, collected as a band on the form
///
/// Each band stands for a fixed millimeter value; the model never sees
/// the band itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RainfallLevel {
    Low,
    Moderate,
    High,
}

impl RainfallLevel {
    /// Fixed seasonal rainfall in millimeters for this band
    pub fn millimeters(&self) -> i32 {
        match self {
            RainfallLevel::Low => 700,
            RainfallLevel::Moderate => 1100,
            RainfallLevel::High => 1450,
        }
    }
}

/// Seasonal temperature level, collected as a band on the form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureLevel {
    Cool,
    Moderate,
    Warm,
}

impl TemperatureLevel {
    /// Fixed average temperature in degrees Celsius for this band
    pub fn celsius(&self) -> f64 {
        match self {
            TemperatureLevel::Cool => 23.0,
            TemperatureLevel::Moderate => 25.0,
            TemperatureLevel::Warm => 27.0,
        }
    }
}

/// A farm described by the prediction form
///
/// Numeric ranges mirror the form controls; `validate()` enforces them
/// at the input-collection boundary so the mapper never has to.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct FarmDescription {
    pub season_year: i32,
    pub region: Region,
    pub maize_type: MaizeType,
    pub soil_quality: SoilQuality,
    pub fertilizer_type: FertilizerType,
    pub irrigated: bool,
    pub crop_rotation: bool,
    #[validate(range(min = 1, max = 30))]
    pub farmer_experience_years: i32,
    #[validate(range(min = 0.5, max = 50.0))]
    pub area_ha: f64,
    pub rainfall_level: RainfallLevel,
    pub temperature_level: TemperatureLevel,
    #[validate(range(min = 20.0, max = 300.0))]
    pub fertilizer_kg_ha: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_training_data() {
        assert_eq!(MaizeType::Opv.as_label(), "OPV");
        assert_eq!(Region::Central.as_label(), "Central");
        assert_eq!(SoilQuality::Excellent.as_label(), "Excellent");
        assert_eq!(FertilizerType::Inorganic.as_label(), "Inorganic");
    }

    #[test]
    fn test_wire_format_is_snake_case() {
        assert_eq!(serde_json::to_string(&MaizeType::Opv).unwrap(), "\"opv\"");
        assert_eq!(
            serde_json::from_str::<Region>("\"central\"").unwrap(),
            Region::Central
        );
    }

    #[test]
    fn test_unknown_wire_value_is_rejected() {
        assert!(serde_json::from_str::<SoilQuality>("\"amazing\"").is_err());
        assert!(serde_json::from_str::<RainfallLevel>("\"torrential\"").is_err());
    }

    #[test]
    fn test_rainfall_constants() {
        assert_eq!(RainfallLevel::Low.millimeters(), 700);
        assert_eq!(RainfallLevel::Moderate.millimeters(), 1100);
        assert_eq!(RainfallLevel::High.millimeters(), 1450);
    }

    #[test]
    fn test_temperature_constants() {
        assert_eq!(TemperatureLevel::Cool.celsius(), 23.0);
        assert_eq!(TemperatureLevel::Moderate.celsius(), 25.0);
        assert_eq!(TemperatureLevel::Warm.celsius(), 27.0);
    }
}
