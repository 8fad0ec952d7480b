//! Crop suitability rules and the catalog that holds them

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ScoringError, ScoringResult};
use crate::models::soil::ErosionRange;
use crate::types::ValueRange;
use crate::validation::validate_crop_rule;

/// Conditions under which a crop is considered suitable
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropRule {
    pub name: String,
    pub temperature_celsius: ValueRange,
    /// Accumulated over the same look-back window as the weather snapshot
    pub precipitation_mm: ValueRange,
    pub humidity_percent: ValueRange,
    pub fertility_index: ValueRange,
    pub erosion: ErosionRange,
}

/// A validated, read-only set of crop rules
///
/// Construction checks that the catalog is non-empty, every rule is
/// well-formed and crop names are unique (case-insensitive).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CropCatalog {
    crops: Vec<CropRule>,
}

impl CropCatalog {
    pub fn new(crops: Vec<CropRule>) -> ScoringResult<Self> {
        if crops.is_empty() {
            return Err(ScoringError::invalid("catalog", "Crop catalog must not be empty"));
        }

        let mut seen = HashSet::new();
        for rule in &crops {
            validate_crop_rule(rule)?;
            if !seen.insert(rule.name.trim().to_lowercase()) {
                return Err(ScoringError::invalid(
                    "catalog",
                    format!("Duplicate crop name: {}", rule.name),
                ));
            }
        }

        Ok(Self { crops })
    }

    pub fn crops(&self) -> &[CropRule] {
        &self.crops
    }

    pub fn iter(&self) -> impl Iterator<Item = &CropRule> {
        self.crops.iter()
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&CropRule> {
        self.crops
            .iter()
            .find(|rule| rule.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl<'de> Deserialize<'de> for CropCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawCatalog {
            crops: Vec<CropRule>,
        }

        let raw = RawCatalog::deserialize(deserializer)?;
        CropCatalog::new(raw.crops).map_err(serde::de::Error::custom)
    }
}
