//! Crop scoring integration tests
//!
//! Tests for the rule-based scorer including:
//! - Ranking covers the whole catalog
//! - Identical inputs give identical rankings, ties included
//! - Penalty grows as a value moves further outside a range
//! - Range endpoints carry no penalty

use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crop_advisor::AppError;
use shared::{
    builtin_catalog, rank_crops, score_rule, CropCatalog, CropRule, CropScorer, ErosionLevel,
    ErosionRange, RuleBasedScorer, ScoringWeights, SoilProfile, ValueRange, WeatherSnapshot,
    EROSION_DOMAIN, FERTILITY_DOMAIN, HUMIDITY_DOMAIN, PRECIPITATION_DOMAIN, TEMPERATURE_DOMAIN,
};

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn range(min: &str, max: &str) -> ValueRange {
    ValueRange::new(dec(min), dec(max))
}

fn rice() -> CropRule {
    CropRule {
        name: "Rice".to_string(),
        temperature_celsius: range("20", "35"),
        precipitation_mm: range("100", "300"),
        humidity_percent: range("50", "90"),
        fertility_index: range("50", "100"),
        erosion: ErosionRange::up_to(ErosionLevel::Medium),
    }
}

fn wheat() -> CropRule {
    CropRule {
        name: "Wheat".to_string(),
        temperature_celsius: range("10", "20"),
        precipitation_mm: range("30", "100"),
        humidity_percent: range("30", "60"),
        fertility_index: range("40", "80"),
        erosion: ErosionRange::up_to(ErosionLevel::Medium),
    }
}

fn loam(fertility: &str, erosion: ErosionLevel) -> SoilProfile {
    SoilProfile::new("Loam", dec(fertility), erosion)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Rice fits every attribute, Wheat misses temperature and precipitation
    #[test]
    fn test_rice_ranks_above_wheat() {
        let catalog = CropCatalog::new(vec![wheat(), rice()]).unwrap();
        let weather = WeatherSnapshot::new(dec("25"), dec("150"), dec("60"));
        let soil = loam("70", ErosionLevel::Low);

        let ranked = rank_crops(&weather, &soil, &catalog, &ScoringWeights::default()).unwrap();

        assert_eq!(ranked[0].crop, "Rice");
        assert_eq!(ranked[1].crop, "Wheat");
        assert!(ranked[0].penalty < ranked[1].penalty);
        assert!(ranked[0].is_full_match());
        assert_eq!(ranked[1].breakdown.unmet_attributes(), vec!["temperature", "precipitation"]);
    }

    /// Negative humidity is rejected, never clamped
    #[test]
    fn test_negative_humidity_is_invalid_input() {
        let catalog = CropCatalog::new(vec![rice(), wheat()]).unwrap();
        let weather = WeatherSnapshot::new(dec("25"), dec("150"), dec("-5"));
        let soil = loam("70", ErosionLevel::Low);

        let err = rank_crops(&weather, &soil, &catalog, &ScoringWeights::default()).unwrap_err();
        assert_eq!(err.field(), "humidity_percent");

        let app_err: AppError = err.into();
        assert!(matches!(app_err, AppError::InvalidInput { ref field, .. } if field == "humidity_percent"));
    }

    /// Equal penalties fall back to alphabetical order
    #[test]
    fn test_ties_break_by_name() {
        let mut barley = rice();
        barley.name = "Barley".to_string();
        let catalog = CropCatalog::new(vec![rice(), barley]).unwrap();
        let weather = WeatherSnapshot::new(dec("25"), dec("150"), dec("60"));

        let ranked = rank_crops(&weather, &loam("70", ErosionLevel::Low), &catalog, &ScoringWeights::default()).unwrap();
        assert_eq!(ranked[0].crop, "Barley");
        assert_eq!(ranked[1].crop, "Rice");
    }

    /// Erosion above the tolerated level is penalized on the ordinal scale
    #[test]
    fn test_erosion_penalty() {
        let weather = WeatherSnapshot::new(dec("25"), dec("150"), dec("60"));
        let rec = score_rule(&rice(), &weather, &loam("70", ErosionLevel::High), &ScoringWeights::default());
        // High (4) is two levels above Medium (2) on a 0-4 scale
        assert_eq!(rec.breakdown.erosion, dec("0.5"));
    }

    /// Zero weight removes an attribute from the ranking
    #[test]
    fn test_zero_weight_ignores_attribute() {
        let weights = ScoringWeights {
            temperature: Decimal::ZERO,
            ..ScoringWeights::default()
        };
        let weather = WeatherSnapshot::new(dec("50"), dec("150"), dec("60"));
        let rec = score_rule(&rice(), &weather, &loam("70", ErosionLevel::Low), &weights);
        assert!(rec.breakdown.temperature > Decimal::ZERO);
        assert_eq!(rec.penalty, Decimal::ZERO);
    }

    #[test]
    fn test_scorer_trait_matches_rank_crops() {
        let catalog = builtin_catalog().unwrap();
        let weather = WeatherSnapshot::new(dec("18"), dec("60"), dec("70"));
        let soil = loam("80", ErosionLevel::Low);

        let scorer = RuleBasedScorer::default();
        let via_trait = scorer.rank(&weather, &soil, &catalog).unwrap();
        let direct = rank_crops(&weather, &soil, &catalog, &ScoringWeights::default()).unwrap();
        assert_eq!(via_trait, direct);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = ScoringWeights {
            humidity: dec("-1"),
            ..ScoringWeights::default()
        };
        assert!(RuleBasedScorer::new(weights).is_err());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating temperatures across the valid domain
    fn temperature_strategy() -> impl Strategy<Value = Decimal> {
        (-600i64..=600i64).prop_map(|n| Decimal::new(n, 1)) // -60.0 to 60.0°C
    }

    /// Strategy for generating window precipitation totals
    fn precipitation_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..=100000i64).prop_map(|n| Decimal::new(n, 1)) // 0.0 to 10000.0mm
    }

    /// Strategy for generating 0-100 percentages
    fn percent_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..=1000i64).prop_map(|n| Decimal::new(n, 1))
    }

    fn erosion_strategy() -> impl Strategy<Value = ErosionLevel> {
        (0u8..=4u8).prop_map(|n| ErosionLevel::from_ordinal(n).unwrap())
    }

    #[derive(Debug, Clone, Copy)]
    enum Attribute {
        Temperature,
        Precipitation,
        Humidity,
        Fertility,
        Erosion,
    }

    fn attribute_strategy() -> impl Strategy<Value = Attribute> {
        prop_oneof![
            Just(Attribute::Temperature),
            Just(Attribute::Precipitation),
            Just(Attribute::Humidity),
            Just(Attribute::Fertility),
            Just(Attribute::Erosion),
        ]
    }

    /// Every range sits strictly inside its domain, so both sides can be left
    fn banded() -> CropRule {
        CropRule {
            name: "Sorghum".to_string(),
            temperature_celsius: range("10", "30"),
            precipitation_mm: range("200", "600"),
            humidity_percent: range("40", "80"),
            fertility_index: range("40", "80"),
            erosion: ErosionRange::new(ErosionLevel::LowToMedium, ErosionLevel::MediumToHigh),
        }
    }

    /// Rule range and valid domain for an attribute, erosion as ordinals
    fn bounds(attribute: Attribute) -> (ValueRange, ValueRange) {
        let rule = banded();
        match attribute {
            Attribute::Temperature => (rule.temperature_celsius, TEMPERATURE_DOMAIN),
            Attribute::Precipitation => (rule.precipitation_mm, PRECIPITATION_DOMAIN),
            Attribute::Humidity => (rule.humidity_percent, HUMIDITY_DOMAIN),
            Attribute::Fertility => (rule.fertility_index, FERTILITY_DOMAIN),
            Attribute::Erosion => (
                ValueRange::new(
                    Decimal::from(rule.erosion.min.ordinal()),
                    Decimal::from(rule.erosion.max.ordinal()),
                ),
                EROSION_DOMAIN,
            ),
        }
    }

    /// Conditions inside the banded rule, except `attribute` set to `value`
    fn conditions_with(attribute: Attribute, value: Decimal) -> (WeatherSnapshot, SoilProfile) {
        let mut weather = WeatherSnapshot::new(dec("20"), dec("400"), dec("60"));
        let mut soil = loam("60", ErosionLevel::Medium);
        match attribute {
            Attribute::Temperature => weather.temperature_celsius = value,
            Attribute::Precipitation => weather.precipitation_mm = value,
            Attribute::Humidity => weather.humidity_percent = value,
            Attribute::Fertility => soil.fertility_index = value,
            Attribute::Erosion => {
                let ordinal = value.floor().to_u8().unwrap();
                soil.erosion = ErosionLevel::from_ordinal(ordinal).unwrap();
            }
        }
        (weather, soil)
    }

    fn attribute_is_continuous(attribute: Attribute) -> bool {
        !matches!(attribute, Attribute::Erosion)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Every catalog crop appears exactly once
        #[test]
        fn prop_ranking_covers_catalog(
            temp in temperature_strategy(),
            precip in precipitation_strategy(),
            humidity in percent_strategy(),
            fertility in percent_strategy(),
            erosion in erosion_strategy()
        ) {
            let catalog = builtin_catalog().unwrap();
            let weather = WeatherSnapshot::new(temp, precip, humidity);
            let soil = SoilProfile::new("Loam", fertility, erosion);

            let ranked = rank_crops(&weather, &soil, &catalog, &ScoringWeights::default()).unwrap();

            prop_assert_eq!(ranked.len(), catalog.len());
            for rule in catalog.iter() {
                prop_assert_eq!(ranked.iter().filter(|r| r.crop == rule.name).count(), 1);
            }
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].penalty <= pair[1].penalty);
            }
        }

        /// Same inputs, same ordering
        #[test]
        fn prop_ranking_is_deterministic(
            temp in temperature_strategy(),
            precip in precipitation_strategy(),
            humidity in percent_strategy(),
            fertility in percent_strategy(),
            erosion in erosion_strategy()
        ) {
            let catalog = builtin_catalog().unwrap();
            let weather = WeatherSnapshot::new(temp, precip, humidity);
            let soil = SoilProfile::new("Loam", fertility, erosion);

            let first = rank_crops(&weather, &soil, &catalog, &ScoringWeights::default()).unwrap();
            let second = rank_crops(&weather, &soil, &catalog, &ScoringWeights::default()).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Moving any attribute further outside its range, on either side,
        /// never lowers the penalty
        #[test]
        fn prop_penalty_monotonic_outside_range(
            attribute in attribute_strategy(),
            above in any::<bool>(),
            a in 0i64..=1000i64,
            b in 0i64..=1000i64
        ) {
            let (rule_range, domain) = bounds(attribute);
            let (endpoint, edge) = if above {
                (rule_range.max, domain.max)
            } else {
                (rule_range.min, domain.min)
            };
            // Fractions of the way from the rule endpoint to the domain edge
            let near = endpoint + (edge - endpoint) * Decimal::new(a.min(b), 3);
            let far = endpoint + (edge - endpoint) * Decimal::new(a.max(b), 3);

            let weights = ScoringWeights::default();
            let (near_weather, near_soil) = conditions_with(attribute, near);
            let (far_weather, far_soil) = conditions_with(attribute, far);
            let near_rec = score_rule(&banded(), &near_weather, &near_soil, &weights);
            let far_rec = score_rule(&banded(), &far_weather, &far_soil, &weights);

            prop_assert!(far_rec.penalty >= near_rec.penalty);
            prop_assert!(far_rec.score <= near_rec.score);
            if a != b && attribute_is_continuous(attribute) {
                prop_assert!(far_rec.penalty > near_rec.penalty);
            }
        }

        /// Values on or between the endpoints carry no penalty
        #[test]
        fn prop_inside_range_has_zero_penalty(
            temp in 200i64..=350i64,
            precip in 100i64..=300i64,
            humidity in 50i64..=90i64,
            fertility in 50i64..=100i64
        ) {
            let weather = WeatherSnapshot::new(Decimal::new(temp, 1), Decimal::from(precip), Decimal::from(humidity));
            let soil = SoilProfile::new("Loam", Decimal::from(fertility), ErosionLevel::Medium);

            let rec = score_rule(&rice(), &weather, &soil, &ScoringWeights::default());
            prop_assert_eq!(rec.penalty, Decimal::ZERO);
            prop_assert_eq!(rec.score, Decimal::ONE_HUNDRED);
        }
    }
}
