//! Climate zone classification and the latitude-band soil table

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::{ErosionLevel, SoilProfile};

/// Upper |latitude| of the tropical band
pub const TROPICAL_LATITUDE: Decimal = dec!(23.5);
/// Upper |latitude| of the subtropical band
pub const SUBTROPICAL_LATITUDE: Decimal = dec!(35);
/// Upper |latitude| of the temperate band
pub const TEMPERATE_LATITUDE: Decimal = dec!(66);

/// Broad climate zone of a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateZone {
    TropicalRainforest,
    TropicalSavanna,
    Tropical,
    SubtropicalMonsoon,
    Subtropical,
    Temperate,
    Polar,
}

impl ClimateZone {
    /// Rainforest or monsoon climates, which leach tropical soils
    pub fn is_wet(&self) -> bool {
        matches!(self, ClimateZone::TropicalRainforest | ClimateZone::SubtropicalMonsoon)
    }
}

impl std::fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClimateZone::TropicalRainforest => write!(f, "Tropical Rainforest"),
            ClimateZone::TropicalSavanna => write!(f, "Tropical Savanna"),
            ClimateZone::Tropical => write!(f, "Tropical"),
            ClimateZone::SubtropicalMonsoon => write!(f, "Subtropical Monsoon"),
            ClimateZone::Subtropical => write!(f, "Subtropical"),
            ClimateZone::Temperate => write!(f, "Temperate"),
            ClimateZone::Polar => write!(f, "Polar"),
        }
    }
}

/// Classify by latitude band, refined with today's maximum temperature (°C)
/// and today's precipitation total (mm)
pub fn classify_climate_zone(latitude: Decimal, max_temperature: Decimal, precipitation: Decimal) -> ClimateZone {
    let lat = latitude.abs();

    if lat <= TROPICAL_LATITUDE {
        if max_temperature > dec!(25) && precipitation > dec!(60) {
            ClimateZone::TropicalRainforest
        } else if max_temperature > dec!(25) {
            ClimateZone::TropicalSavanna
        } else {
            ClimateZone::Tropical
        }
    } else if lat <= SUBTROPICAL_LATITUDE {
        if precipitation > dec!(20) {
            ClimateZone::SubtropicalMonsoon
        } else {
            ClimateZone::Subtropical
        }
    } else if lat <= TEMPERATE_LATITUDE {
        ClimateZone::Temperate
    } else {
        ClimateZone::Polar
    }
}

/// Typical soil for a latitude band and climate zone
pub fn band_soil_profile(latitude: Decimal, zone: ClimateZone) -> SoilProfile {
    let lat = latitude.abs();

    if lat <= TROPICAL_LATITUDE {
        if zone.is_wet() {
            SoilProfile::new("Lateritic Soil", dec!(55), ErosionLevel::High).with_notes(
                "Rich in iron oxides and prone to leaching; needs careful erosion control and organic matter.",
            )
        } else {
            SoilProfile::new("Red and Yellow Soil", dec!(55), ErosionLevel::MediumToHigh)
                .with_notes("Seasonal rainfall dependent; deep ploughing helps water retention.")
        }
    } else if lat <= SUBTROPICAL_LATITUDE {
        SoilProfile::new("Subtropical Loam/Alluvial Soil", dec!(80), ErosionLevel::LowToMedium).with_notes(
            "Very versatile soil; careful water management is key, especially during dry spells.",
        )
    } else if lat <= TEMPERATE_LATITUDE {
        SoilProfile::new("Brown Earth/Forest Soil", dec!(80), ErosionLevel::Low)
            .with_notes("Well-suited for extensive farming; lime may be needed to adjust pH.")
    } else {
        SoilProfile::new("Tundra Soil", dec!(30), ErosionLevel::Medium).with_notes(
            "Limited growing season; focus on raised beds and protecting from permafrost.",
        )
    }
}
