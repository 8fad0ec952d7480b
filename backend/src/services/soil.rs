//! Soil profile lookup
//!
//! Configured overrides win; otherwise the latitude band table supplies a
//! typical profile for the region's climate zone.

use shared::{band_soil_profile, validate_soil_profile, ClimateZone, Region, SoilProfile};

use crate::config::SoilOverride;
use crate::error::{AppError, AppResult};

/// Resolves the soil attributes used for scoring
pub trait SoilProfileLookup: Send + Sync {
    fn profile_for(&self, region: &Region, zone: ClimateZone) -> AppResult<SoilProfile>;
}

/// Lookup backed by configured overrides and the latitude band table
#[derive(Debug, Clone, Default)]
pub struct StaticSoilLookup {
    overrides: Vec<SoilOverride>,
}

impl StaticSoilLookup {
    /// Overrides are validated once here so lookups cannot fail on them later
    pub fn new(overrides: Vec<SoilOverride>) -> AppResult<Self> {
        for entry in &overrides {
            if entry.region.trim().is_empty() {
                return Err(AppError::Configuration("Soil override with an empty region name".to_string()));
            }
            validate_soil_profile(&Self::to_profile(entry))
                .map_err(|e| AppError::Configuration(format!("Soil override for {}: {}", entry.region, e)))?;
        }
        Ok(Self { overrides })
    }

    fn to_profile(entry: &SoilOverride) -> SoilProfile {
        let profile = SoilProfile::new(entry.soil_type.clone(), entry.fertility, entry.erosion);
        match &entry.notes {
            Some(notes) => profile.with_notes(notes.clone()),
            None => profile,
        }
    }
}

impl SoilProfileLookup for StaticSoilLookup {
    fn profile_for(&self, region: &Region, zone: ClimateZone) -> AppResult<SoilProfile> {
        if let Some(entry) = self.overrides.iter().find(|o| region.matches(&o.region)) {
            tracing::debug!(region = %region.name, "Using configured soil override");
            return Ok(Self::to_profile(entry));
        }
        Ok(band_soil_profile(region.coordinates.latitude, zone))
    }
}
