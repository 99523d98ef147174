//! Property tests for the feature mapper
//!
//! Covers the mapper invariants across the whole valid input space:
//! determinism, fixed lookup constants, 0/1 boolean coercion, and the
//! stability of the serialized column order.

use proptest::prelude::*;

use shared::{
    map_features, FarmDescription, FertilizerType, MaizeType, RainfallLevel, Region, SoilQuality,
    TemperatureLevel, FEATURE_NAMES, SUPPORTED_YEARS,
};

prop_compose! {
    fn farm_strategy()(
        season_year in prop::sample::select(SUPPORTED_YEARS.to_vec()),
        region in prop::sample::select(vec![Region::North, Region::Central, Region::South]),
        maize_type in prop::sample::select(vec![MaizeType::Local, MaizeType::Hybrid, MaizeType::Opv]),
        soil_quality in prop::sample::select(vec![
            SoilQuality::Poor,
            SoilQuality::Average,
            SoilQuality::Good,
            SoilQuality::Excellent,
        ]),
        fertilizer_type in prop::sample::select(vec![
            FertilizerType::Organic,
            FertilizerType::Inorganic,
            FertilizerType::Mixed,
        ]),
        irrigated in any::<bool>(),
        crop_rotation in any::<bool>(),
        farmer_experience_years in 1..=30,
        area_ha in 0.5f64..=50.0,
        rainfall_level in prop::sample::select(vec![
            RainfallLevel::Low,
            RainfallLevel::Moderate,
            RainfallLevel::High,
        ]),
        temperature_level in prop::sample::select(vec![
            TemperatureLevel::Cool,
            TemperatureLevel::Moderate,
            TemperatureLevel::Warm,
        ]),
        fertilizer_kg_ha in 20.0f64..=300.0,
    ) -> FarmDescription {
        FarmDescription {
            season_year,
            region,
            maize_type,
            soil_quality,
            fertilizer_type,
            irrigated,
            crop_rotation,
            farmer_experience_years,
            area_ha,
            rainfall_level,
            temperature_level,
            fertilizer_kg_ha,
        }
    }
}

proptest! {
    #[test]
    fn mapping_is_deterministic(farm in farm_strategy()) {
        let first = map_features(&farm);
        let second = map_features(&farm);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn rainfall_maps_to_fixed_millimeters(farm in farm_strategy()) {
        let record = map_features(&farm);
        let expected = match farm.rainfall_level {
            RainfallLevel::Low => 700,
            RainfallLevel::Moderate => 1100,
            RainfallLevel::High => 1450,
        };
        prop_assert_eq!(record.rainfall_mm, expected);
    }

    #[test]
    fn temperature_maps_to_fixed_celsius(farm in farm_strategy()) {
        let record = map_features(&farm);
        let expected = match farm.temperature_level {
            TemperatureLevel::Cool => 23.0,
            TemperatureLevel::Moderate => 25.0,
            TemperatureLevel::Warm => 27.0,
        };
        prop_assert_eq!(record.avg_temp_c, expected);
    }

    #[test]
    fn booleans_map_to_zero_or_one(farm in farm_strategy()) {
        let record = map_features(&farm);
        prop_assert_eq!(record.irrigated, farm.irrigated as i32);
        prop_assert_eq!(record.crop_rotation, farm.crop_rotation as i32);
        prop_assert!(record.irrigated == 0 || record.irrigated == 1);
        prop_assert!(record.crop_rotation == 0 || record.crop_rotation == 1);
    }

    #[test]
    fn serialized_column_order_is_stable(farm in farm_strategy()) {
        let json = serde_json::to_string(&map_features(&farm)).unwrap();
        let mut last_position = 0;
        for name in FEATURE_NAMES {
            let needle = format!("\"{}\":", name);
            let position = json.find(&needle);
            prop_assert!(position.is_some(), "column {} missing from {}", name, json);
            let position = position.unwrap();
            prop_assert!(position >= last_position, "column {} out of order", name);
            last_position = position;
        }
    }
}
