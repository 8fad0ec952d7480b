//! Rule-based crop suitability scoring
//!
//! For each crop rule and attribute the penalty is zero inside the rule's
//! range (endpoints included) and otherwise the distance to the nearest
//! endpoint divided by the width of the attribute's valid domain, so every
//! attribute contributes on the same 0-1 scale. The aggregate penalty is the
//! weighted sum; crops are ranked by ascending penalty, ties by name.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ScoringError, ScoringResult};
use crate::models::{
    CropCatalog, CropRule, ErosionRange, PenaltyBreakdown, Recommendation, SoilProfile,
    WeatherSnapshot,
};
use crate::types::ValueRange;
use crate::validation::{
    validate_soil_profile, validate_weather_snapshot, EROSION_DOMAIN, FERTILITY_DOMAIN,
    HUMIDITY_DOMAIN, PRECIPITATION_DOMAIN, TEMPERATURE_DOMAIN,
};

/// Largest accepted weight for a single attribute
pub const MAX_WEIGHT: Decimal = Decimal::ONE_THOUSAND;

/// Relative importance of each attribute in the aggregate penalty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    #[serde(default = "unit_weight")]
    pub temperature: Decimal,
    #[serde(default = "unit_weight")]
    pub precipitation: Decimal,
    #[serde(default = "unit_weight")]
    pub humidity: Decimal,
    #[serde(default = "unit_weight")]
    pub fertility: Decimal,
    #[serde(default = "unit_weight")]
    pub erosion: Decimal,
}

fn unit_weight() -> Decimal {
    Decimal::ONE
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            temperature: Decimal::ONE,
            precipitation: Decimal::ONE,
            humidity: Decimal::ONE,
            fertility: Decimal::ONE,
            erosion: Decimal::ONE,
        }
    }
}

impl ScoringWeights {
    pub fn total(&self) -> Decimal {
        self.temperature + self.precipitation + self.humidity + self.fertility + self.erosion
    }

    /// Weights must lie in 0..=1000 and not all be zero
    pub fn validate(&self) -> ScoringResult<()> {
        let named = [
            ("weights.temperature", self.temperature),
            ("weights.precipitation", self.precipitation),
            ("weights.humidity", self.humidity),
            ("weights.fertility", self.fertility),
            ("weights.erosion", self.erosion),
        ];
        for (field, weight) in named {
            if weight < Decimal::ZERO {
                return Err(ScoringError::invalid(field, "Weight cannot be negative"));
            }
            if weight > MAX_WEIGHT {
                return Err(ScoringError::invalid(
                    field,
                    format!("Weight cannot exceed {}", MAX_WEIGHT),
                ));
            }
        }
        if self.total().is_zero() {
            return Err(ScoringError::invalid("weights", "At least one weight must be positive"));
        }
        Ok(())
    }

    fn apply(&self, breakdown: &PenaltyBreakdown) -> Decimal {
        self.temperature * breakdown.temperature
            + self.precipitation * breakdown.precipitation
            + self.humidity * breakdown.humidity
            + self.fertility * breakdown.fertility
            + self.erosion * breakdown.erosion
    }
}

/// Ranks a crop catalog for one set of growing conditions
///
/// Implementations must be pure and deterministic: identical inputs give an
/// identical ordering, most suitable first, one entry per catalog crop.
pub trait CropScorer: Send + Sync {
    fn rank(
        &self,
        weather: &WeatherSnapshot,
        soil: &SoilProfile,
        catalog: &CropCatalog,
    ) -> ScoringResult<Vec<Recommendation>>;
}

/// Transparent range-distance scorer
#[derive(Debug, Clone, Default)]
pub struct RuleBasedScorer {
    weights: ScoringWeights,
}

impl RuleBasedScorer {
    pub fn new(weights: ScoringWeights) -> ScoringResult<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }
}

impl CropScorer for RuleBasedScorer {
    fn rank(
        &self,
        weather: &WeatherSnapshot,
        soil: &SoilProfile,
        catalog: &CropCatalog,
    ) -> ScoringResult<Vec<Recommendation>> {
        rank_crops(weather, soil, catalog, &self.weights)
    }
}

/// Score every crop in the catalog and sort, most suitable first
pub fn rank_crops(
    weather: &WeatherSnapshot,
    soil: &SoilProfile,
    catalog: &CropCatalog,
    weights: &ScoringWeights,
) -> ScoringResult<Vec<Recommendation>> {
    validate_weather_snapshot(weather)?;
    validate_soil_profile(soil)?;
    weights.validate()?;
    if catalog.is_empty() {
        return Err(ScoringError::invalid("catalog", "Crop catalog must not be empty"));
    }

    let mut recommendations: Vec<Recommendation> = catalog
        .iter()
        .map(|rule| score_rule(rule, weather, soil, weights))
        .collect();

    recommendations.sort_by(|a, b| a.penalty.cmp(&b.penalty).then_with(|| a.crop.cmp(&b.crop)));

    Ok(recommendations)
}

/// Score one rule against already-validated inputs
pub fn score_rule(
    rule: &CropRule,
    weather: &WeatherSnapshot,
    soil: &SoilProfile,
    weights: &ScoringWeights,
) -> Recommendation {
    let breakdown = penalty_breakdown(rule, weather, soil);
    let penalty = weights.apply(&breakdown);

    Recommendation {
        crop: rule.name.clone(),
        score: suitability_score(penalty, weights),
        penalty,
        breakdown,
    }
}

/// Unweighted per-attribute penalties for one rule
pub fn penalty_breakdown(rule: &CropRule, weather: &WeatherSnapshot, soil: &SoilProfile) -> PenaltyBreakdown {
    PenaltyBreakdown {
        temperature: normalized_penalty(
            weather.temperature_celsius,
            &rule.temperature_celsius,
            &TEMPERATURE_DOMAIN,
        ),
        precipitation: normalized_penalty(
            weather.precipitation_mm,
            &rule.precipitation_mm,
            &PRECIPITATION_DOMAIN,
        ),
        humidity: normalized_penalty(weather.humidity_percent, &rule.humidity_percent, &HUMIDITY_DOMAIN),
        fertility: normalized_penalty(soil.fertility_index, &rule.fertility_index, &FERTILITY_DOMAIN),
        erosion: normalized_penalty(
            Decimal::from(soil.erosion.ordinal()),
            &erosion_ordinal_range(&rule.erosion),
            &EROSION_DOMAIN,
        ),
    }
}

fn erosion_ordinal_range(range: &ErosionRange) -> ValueRange {
    ValueRange::new(
        Decimal::from(range.min.ordinal()),
        Decimal::from(range.max.ordinal()),
    )
}

/// Distance outside `range`, scaled by the width of the attribute's domain
fn normalized_penalty(value: Decimal, range: &ValueRange, domain: &ValueRange) -> Decimal {
    let distance = range.distance_outside(value);
    if distance.is_zero() {
        return Decimal::ZERO;
    }
    distance / domain.width()
}

/// Map an aggregate penalty onto 0-100, two decimal places
fn suitability_score(penalty: Decimal, weights: &ScoringWeights) -> Decimal {
    let fit = Decimal::ONE - penalty / weights.total();
    (Decimal::ONE_HUNDRED * fit)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        .round_dp(2)
}
