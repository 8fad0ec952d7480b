//! Caller-supplied growing conditions, scored without any upstream lookup

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::soil::{ErosionLevel, SoilProfile};
use super::weather::WeatherSnapshot;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReading {
    pub temperature_celsius: Decimal,
    /// Total over the look-back window, mm
    pub precipitation_mm: Decimal,
    pub humidity_percent: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilReading {
    #[serde(default = "unspecified_soil")]
    pub soil_type: String,
    pub fertility_index: Decimal,
    pub erosion: ErosionLevel,
}

fn unspecified_soil() -> String {
    "Unspecified".to_string()
}

/// Weather and soil values as submitted by a caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowingConditions {
    pub weather: WeatherReading,
    pub soil: SoilReading,
}

impl GrowingConditions {
    pub fn into_parts(self) -> (WeatherSnapshot, SoilProfile) {
        let weather = WeatherSnapshot::new(
            self.weather.temperature_celsius,
            self.weather.precipitation_mm,
            self.weather.humidity_percent,
        );
        let soil = SoilProfile::new(self.soil.soil_type, self.soil.fertility_index, self.soil.erosion);
        (weather, soil)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_and_split() {
        let json = r#"{
            "weather": {"temperature_celsius": 25, "precipitation_mm": 150, "humidity_percent": 60},
            "soil": {"fertility_index": 70, "erosion": "low"}
        }"#;
        let conditions: GrowingConditions = serde_json::from_str(json).unwrap();
        let (weather, soil) = conditions.into_parts();

        assert_eq!(weather.temperature_celsius, dec!(25));
        assert!(weather.conditions.is_none());
        assert_eq!(soil.soil_type, "Unspecified");
        assert_eq!(soil.erosion, ErosionLevel::Low);
    }
}
