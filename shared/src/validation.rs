//! Validation utilities for the Crop Advisor
//!
//! Every scored attribute has a declared valid domain. Values outside it are
//! rejected, never clamped.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{ScoringError, ScoringResult};
use crate::models::{CropRule, SoilProfile, WeatherSnapshot};
use crate::types::{GpsCoordinates, ValueRange};

// ============================================================================
// Attribute Domains
// ============================================================================

/// Air temperature, °C
pub const TEMPERATURE_DOMAIN: ValueRange = ValueRange {
    min: dec!(-60),
    max: dec!(60),
};

/// Precipitation accumulated over the look-back window, mm
///
/// Bounded above the wettest calendar month on record (about 9300 mm) so
/// any window up to [`MAX_PRECIPITATION_WINDOW_DAYS`] stays inside it.
pub const PRECIPITATION_DOMAIN: ValueRange = ValueRange {
    min: dec!(0),
    max: dec!(10000),
};

/// Relative humidity, %
pub const HUMIDITY_DOMAIN: ValueRange = ValueRange {
    min: dec!(0),
    max: dec!(100),
};

/// Soil fertility index
pub const FERTILITY_DOMAIN: ValueRange = ValueRange {
    min: dec!(0),
    max: dec!(100),
};

/// Erosion levels by ordinal, Low (0) to High (4)
pub const EROSION_DOMAIN: ValueRange = ValueRange {
    min: dec!(0),
    max: dec!(4),
};

pub const LATITUDE_DOMAIN: ValueRange = ValueRange {
    min: dec!(-90),
    max: dec!(90),
};

pub const LONGITUDE_DOMAIN: ValueRange = ValueRange {
    min: dec!(-180),
    max: dec!(180),
};

/// Longest precipitation look-back, in days; crop rules are 30-day totals
pub const MAX_PRECIPITATION_WINDOW_DAYS: u16 = 30;

/// Longest accepted region search text
pub const MAX_REGION_QUERY_LEN: usize = 200;

// ============================================================================
// Weather & Soil Validations
// ============================================================================

/// Validate that `value` lies within `domain`
pub fn validate_in_domain(field: &str, value: Decimal, domain: &ValueRange) -> ScoringResult<()> {
    if !domain.contains(value) {
        return Err(ScoringError::invalid(
            field,
            format!("{} is outside the valid range {}", value.normalize(), domain),
        ));
    }
    Ok(())
}

/// Validate every weather attribute against its domain
pub fn validate_weather_snapshot(weather: &WeatherSnapshot) -> ScoringResult<()> {
    validate_in_domain("temperature_celsius", weather.temperature_celsius, &TEMPERATURE_DOMAIN)?;
    validate_in_domain("precipitation_mm", weather.precipitation_mm, &PRECIPITATION_DOMAIN)?;
    validate_in_domain("humidity_percent", weather.humidity_percent, &HUMIDITY_DOMAIN)?;

    if let Some(conditions) = &weather.conditions {
        if conditions.wind_speed_kmh < Decimal::ZERO {
            return Err(ScoringError::invalid("wind_speed_kmh", "Wind speed cannot be negative"));
        }
        if conditions.precipitation_mm < Decimal::ZERO {
            return Err(ScoringError::invalid(
                "current_precipitation_mm",
                "Precipitation cannot be negative",
            ));
        }
    }
    Ok(())
}

/// Validate soil attributes against their domains
pub fn validate_soil_profile(soil: &SoilProfile) -> ScoringResult<()> {
    validate_in_domain("fertility_index", soil.fertility_index, &FERTILITY_DOMAIN)
}

// ============================================================================
// Crop Rule Validations
// ============================================================================

fn validate_rule_range(crop: &str, field: &str, range: &ValueRange, domain: &ValueRange) -> ScoringResult<()> {
    if range.min > range.max {
        return Err(ScoringError::invalid(
            field,
            format!("{}: minimum {} exceeds maximum {}", crop, range.min, range.max),
        ));
    }
    if !range.is_within(domain) {
        return Err(ScoringError::invalid(
            field,
            format!("{}: range {} is outside the valid range {}", crop, range, domain),
        ));
    }
    Ok(())
}

/// Validate that a crop rule is well-formed
pub fn validate_crop_rule(rule: &CropRule) -> ScoringResult<()> {
    let crop = rule.name.trim();
    if crop.is_empty() {
        return Err(ScoringError::invalid("name", "Crop name must not be empty"));
    }

    validate_rule_range(crop, "temperature_celsius", &rule.temperature_celsius, &TEMPERATURE_DOMAIN)?;
    validate_rule_range(crop, "precipitation_mm", &rule.precipitation_mm, &PRECIPITATION_DOMAIN)?;
    validate_rule_range(crop, "humidity_percent", &rule.humidity_percent, &HUMIDITY_DOMAIN)?;
    validate_rule_range(crop, "fertility_index", &rule.fertility_index, &FERTILITY_DOMAIN)?;

    if rule.erosion.min > rule.erosion.max {
        return Err(ScoringError::invalid(
            "erosion",
            format!("{}: minimum {} exceeds maximum {}", crop, rule.erosion.min, rule.erosion.max),
        ));
    }
    Ok(())
}

// ============================================================================
// Location Validations
// ============================================================================

/// Validate latitude and longitude bounds
pub fn validate_coordinates(coordinates: &GpsCoordinates) -> ScoringResult<()> {
    validate_in_domain("latitude", coordinates.latitude, &LATITUDE_DOMAIN)?;
    validate_in_domain("longitude", coordinates.longitude, &LONGITUDE_DOMAIN)
}

/// Validate free-text region search input
pub fn validate_region_query(query: &str) -> ScoringResult<()> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(ScoringError::invalid("region", "Region name must not be empty"));
    }
    if trimmed.chars().count() > MAX_REGION_QUERY_LEN {
        return Err(ScoringError::invalid(
            "region",
            format!("Region name must be at most {} characters", MAX_REGION_QUERY_LEN),
        ));
    }
    Ok(())
}

/// Validate the precipitation look-back window (1-30 days)
pub fn validate_precipitation_window(days: u16) -> ScoringResult<()> {
    if days == 0 || days > MAX_PRECIPITATION_WINDOW_DAYS {
        return Err(ScoringError::invalid(
            "precipitation_window_days",
            format!("Window must be between 1 and {} days", MAX_PRECIPITATION_WINDOW_DAYS),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrentConditions, ErosionLevel, ErosionRange};

    fn weather(temp: Decimal, precip: Decimal, humidity: Decimal) -> WeatherSnapshot {
        WeatherSnapshot::new(temp, precip, humidity)
    }

    // ========================================================================
    // Weather & Soil Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_weather_valid() {
        assert!(validate_weather_snapshot(&weather(dec!(25), dec!(150), dec!(60))).is_ok());
        assert!(validate_weather_snapshot(&weather(dec!(-60), dec!(0), dec!(0))).is_ok());
        assert!(validate_weather_snapshot(&weather(dec!(60), dec!(2000), dec!(100))).is_ok());
    }

    #[test]
    fn test_validate_weather_monsoon_month() {
        // Mawsynram in a wet July
        assert!(validate_weather_snapshot(&weather(dec!(22), dec!(3800), dec!(95))).is_ok());
        assert!(validate_weather_snapshot(&weather(dec!(22), dec!(10000), dec!(95))).is_ok());
        assert!(validate_weather_snapshot(&weather(dec!(22), dec!(10000.1), dec!(95))).is_err());
    }

    #[test]
    fn test_validate_weather_negative_humidity() {
        let err = validate_weather_snapshot(&weather(dec!(25), dec!(150), dec!(-5))).unwrap_err();
        assert_eq!(err.field(), "humidity_percent");
    }

    #[test]
    fn test_validate_weather_out_of_range() {
        assert!(validate_weather_snapshot(&weather(dec!(61), dec!(150), dec!(60))).is_err());
        assert!(validate_weather_snapshot(&weather(dec!(25), dec!(-0.1), dec!(60))).is_err());
        assert!(validate_weather_snapshot(&weather(dec!(25), dec!(150), dec!(100.5))).is_err());
    }

    #[test]
    fn test_validate_weather_negative_wind() {
        let snapshot = weather(dec!(25), dec!(150), dec!(60)).with_conditions(CurrentConditions {
            weather_code: 0,
            wind_speed_kmh: dec!(-1),
            precipitation_mm: dec!(0),
            daily_max_temperature_celsius: dec!(30),
            daily_precipitation_mm: dec!(0),
        });
        let err = validate_weather_snapshot(&snapshot).unwrap_err();
        assert_eq!(err.field(), "wind_speed_kmh");
    }

    #[test]
    fn test_validate_soil() {
        assert!(validate_soil_profile(&SoilProfile::new("Loam", dec!(70), ErosionLevel::Low)).is_ok());
        assert!(validate_soil_profile(&SoilProfile::new("Loam", dec!(101), ErosionLevel::Low)).is_err());
        assert!(validate_soil_profile(&SoilProfile::new("Loam", dec!(-1), ErosionLevel::Low)).is_err());
    }

    // ========================================================================
    // Crop Rule Validation Tests
    // ========================================================================

    fn rice() -> CropRule {
        CropRule {
            name: "Rice".to_string(),
            temperature_celsius: ValueRange::new(dec!(20), dec!(35)),
            precipitation_mm: ValueRange::new(dec!(100), dec!(300)),
            humidity_percent: ValueRange::new(dec!(50), dec!(90)),
            fertility_index: ValueRange::new(dec!(50), dec!(100)),
            erosion: ErosionRange::up_to(ErosionLevel::Medium),
        }
    }

    #[test]
    fn test_validate_crop_rule_valid() {
        assert!(validate_crop_rule(&rice()).is_ok());
    }

    #[test]
    fn test_validate_crop_rule_blank_name() {
        let mut rule = rice();
        rule.name = "  ".to_string();
        assert_eq!(validate_crop_rule(&rule).unwrap_err().field(), "name");
    }

    #[test]
    fn test_validate_crop_rule_outside_domain() {
        let mut rule = rice();
        rule.humidity_percent = ValueRange::new(dec!(50), dec!(120));
        assert_eq!(validate_crop_rule(&rule).unwrap_err().field(), "humidity_percent");
    }

    #[test]
    fn test_validate_crop_rule_inverted_erosion() {
        let mut rule = rice();
        rule.erosion = ErosionRange::new(ErosionLevel::High, ErosionLevel::Low);
        assert_eq!(validate_crop_rule(&rule).unwrap_err().field(), "erosion");
    }

    // ========================================================================
    // Location Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(&GpsCoordinates::new(dec!(18.52), dec!(73.86))).is_ok());
        assert!(validate_coordinates(&GpsCoordinates::new(dec!(90), dec!(-180))).is_ok());
        assert!(validate_coordinates(&GpsCoordinates::new(dec!(91), dec!(0))).is_err());
        assert!(validate_coordinates(&GpsCoordinates::new(dec!(0), dec!(180.5))).is_err());
    }

    #[test]
    fn test_validate_region_query() {
        assert!(validate_region_query("Pune").is_ok());
        assert!(validate_region_query("   ").is_err());
        assert!(validate_region_query(&"x".repeat(MAX_REGION_QUERY_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_precipitation_window() {
        assert!(validate_precipitation_window(30).is_ok());
        assert!(validate_precipitation_window(1).is_ok());
        assert!(validate_precipitation_window(0).is_err());
        assert!(validate_precipitation_window(31).is_err());
        assert!(validate_precipitation_window(92).is_err());
    }
}
