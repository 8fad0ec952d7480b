//! Recommendation models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::climate::ClimateZone;
use crate::models::region::Region;
use crate::models::soil::SoilProfile;
use crate::models::weather::WeatherSnapshot;

/// Per-attribute penalties, each on a common 0-1 scale before weighting
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PenaltyBreakdown {
    pub temperature: Decimal,
    pub precipitation: Decimal,
    pub humidity: Decimal,
    pub fertility: Decimal,
    pub erosion: Decimal,
}

impl PenaltyBreakdown {
    /// Names of attributes that fall outside the crop's range
    pub fn unmet_attributes(&self) -> Vec<&'static str> {
        [
            ("temperature", self.temperature),
            ("precipitation", self.precipitation),
            ("humidity", self.humidity),
            ("fertility", self.fertility),
            ("erosion", self.erosion),
        ]
        .into_iter()
        .filter(|(_, penalty)| *penalty > Decimal::ZERO)
        .map(|(name, _)| name)
        .collect()
    }
}

/// A ranked crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub crop: String,
    /// Weighted sum of attribute penalties; lower is more suitable
    pub penalty: Decimal,
    /// 0-100, derived from the penalty for display
    pub score: Decimal,
    pub breakdown: PenaltyBreakdown,
}

impl Recommendation {
    /// Every attribute lies inside the crop's acceptable range
    pub fn is_full_match(&self) -> bool {
        self.penalty.is_zero()
    }
}

/// Everything produced for one recommendation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub id: Uuid,
    pub region: Region,
    pub weather: WeatherSnapshot,
    pub soil: SoilProfile,
    pub climate_zone: ClimateZone,
    pub recommendations: Vec<Recommendation>,
    pub advice: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl RecommendationReport {
    /// Crop names in rank order
    pub fn crop_names(&self) -> Vec<&str> {
        self.recommendations.iter().map(|r| r.crop.as_str()).collect()
    }
}
