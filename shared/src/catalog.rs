//! Built-in crop catalog
//!
//! Temperatures are daily air temperatures (°C), precipitation is the total
//! over a 30-day window (mm), humidity is relative (%).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::ScoringResult;
use crate::models::{CropCatalog, CropRule, ErosionLevel, ErosionRange};
use crate::types::ValueRange;

fn crop(
    name: &str,
    temperature: (Decimal, Decimal),
    precipitation: (Decimal, Decimal),
    humidity: (Decimal, Decimal),
    fertility: (Decimal, Decimal),
    max_erosion: ErosionLevel,
) -> CropRule {
    CropRule {
        name: name.to_string(),
        temperature_celsius: ValueRange::new(temperature.0, temperature.1),
        precipitation_mm: ValueRange::new(precipitation.0, precipitation.1),
        humidity_percent: ValueRange::new(humidity.0, humidity.1),
        fertility_index: ValueRange::new(fertility.0, fertility.1),
        erosion: ErosionRange::up_to(max_erosion),
    }
}

/// Rules for the crops the advisor knows out of the box
pub fn builtin_crop_rules() -> Vec<CropRule> {
    use ErosionLevel::*;

    vec![
        crop("Rice", (dec!(20), dec!(35)), (dec!(100), dec!(300)), (dec!(50), dec!(90)), (dec!(50), dec!(100)), Medium),
        crop("Wheat", (dec!(10), dec!(25)), (dec!(30), dec!(100)), (dec!(30), dec!(70)), (dec!(40), dec!(85)), LowToMedium),
        crop("Maize", (dec!(18), dec!(32)), (dec!(50), dec!(150)), (dec!(40), dec!(80)), (dec!(50), dec!(90)), Medium),
        crop("Millet", (dec!(25), dec!(38)), (dec!(20), dec!(80)), (dec!(20), dec!(60)), (dec!(20), dec!(70)), MediumToHigh),
        crop("Cotton", (dec!(21), dec!(35)), (dec!(50), dec!(120)), (dec!(40), dec!(70)), (dec!(40), dec!(80)), Medium),
        crop("Pulses", (dec!(18), dec!(30)), (dec!(30), dec!(100)), (dec!(30), dec!(70)), (dec!(30), dec!(70)), MediumToHigh),
        crop("Coffee", (dec!(15), dec!(28)), (dec!(120), dec!(250)), (dec!(60), dec!(90)), (dec!(55), dec!(90)), MediumToHigh),
        crop("Rubber", (dec!(25), dec!(34)), (dec!(150), dec!(350)), (dec!(70), dec!(95)), (dec!(45), dec!(85)), High),
        crop("Citrus", (dec!(13), dec!(35)), (dec!(50), dec!(150)), (dec!(40), dec!(70)), (dec!(50), dec!(85)), Medium),
        crop("Olives", (dec!(15), dec!(35)), (dec!(10), dec!(70)), (dec!(20), dec!(60)), (dec!(25), dec!(70)), MediumToHigh),
        crop("Grapes", (dec!(15), dec!(32)), (dec!(20), dec!(80)), (dec!(30), dec!(65)), (dec!(40), dec!(75)), Medium),
        crop("Soybeans", (dec!(20), dec!(30)), (dec!(50), dec!(150)), (dec!(50), dec!(80)), (dec!(50), dec!(90)), LowToMedium),
        crop("Barley", (dec!(5), dec!(22)), (dec!(25), dec!(90)), (dec!(30), dec!(70)), (dec!(30), dec!(75)), Medium),
        crop("Potatoes", (dec!(10), dec!(24)), (dec!(50), dec!(120)), (dec!(60), dec!(85)), (dec!(55), dec!(90)), LowToMedium),
        crop("Kale", (dec!(0), dec!(24)), (dec!(30), dec!(120)), (dec!(40), dec!(90)), (dec!(35), dec!(80)), Medium),
        crop("Berries", (dec!(2), dec!(22)), (dec!(40), dec!(120)), (dec!(50), dec!(90)), (dec!(30), dec!(70)), Medium),
    ]
}

/// The built-in rules as a validated catalog
pub fn builtin_catalog() -> ScoringResult<CropCatalog> {
    CropCatalog::new(builtin_crop_rules())
}
