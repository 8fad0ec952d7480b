//! Plain-language advice from weather, soil and the crop ranking

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{ErosionLevel, Recommendation, SoilProfile, WeatherSnapshot};

/// Above this temperature irrigation should be stepped up, °C
pub const HEAT_ALERT_CELSIUS: Decimal = dec!(30);
/// Below this temperature crops need cold protection, °C
pub const COOL_WEATHER_CELSIUS: Decimal = dec!(10);
/// Above this wind speed taller crops risk lodging, km/h
pub const WIND_WARNING_KMH: Decimal = dec!(30);
/// Number of crops named in the strategy line
pub const BEST_CROP_COUNT: usize = 3;

/// Build advice lines in display order
pub fn build_advice(weather: &WeatherSnapshot, soil: &SoilProfile, ranked: &[Recommendation]) -> Vec<String> {
    let mut advice = Vec::new();

    advice.push(format!("Soil type: this location features {}.", soil.soil_type));
    if soil.soil_type.contains("Lateritic") || soil.erosion == ErosionLevel::High {
        advice.push(
            "Erosion risk: implement terrace farming or heavy mulching immediately.".to_string(),
        );
    }

    if weather.temperature_celsius > HEAT_ALERT_CELSIUS {
        advice.push(
            "Heat alert: current high temperatures require increased irrigation frequency to prevent crop dehydration."
                .to_string(),
        );
    } else if weather.temperature_celsius < COOL_WEATHER_CELSIUS {
        advice.push(
            "Cool weather: consider protecting vulnerable crops from cold shock, possibly using temporary covers."
                .to_string(),
        );
    }

    if let Some(conditions) = &weather.conditions {
        if conditions.precipitation_mm > Decimal::ZERO || weather.condition().is_rain() {
            advice.push(
                "Rainfall: postpone major field work (ploughing, spraying) for at least 24 hours to prevent soil compaction."
                    .to_string(),
            );
        }
        if conditions.wind_speed_kmh > WIND_WARNING_KMH {
            advice.push(
                "Wind warning: strong winds could cause lodging. Ensure taller crops are staked or sheltered."
                    .to_string(),
            );
        }
    }

    let best: Vec<&str> = ranked
        .iter()
        .take(BEST_CROP_COUNT)
        .map(|r| r.crop.as_str())
        .collect();
    if !best.is_empty() {
        advice.push(format!("Best crop strategy: the most suitable crops are {}.", best.join(", ")));
    }

    advice.push(format!(
        "Fertility: the soil has {} fertility. Supplement with organic compost before planting the next cycle.",
        soil.fertility_label().to_lowercase()
    ));

    if advice.is_empty() {
        advice.push("Conditions are stable. Proceed with routine maintenance and monitoring.".to_string());
    }

    advice
}
