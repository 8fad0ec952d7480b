//! Soil fertility and erosion models

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Soil erosion risk, ordered from least to most degraded
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErosionLevel {
    Low,
    LowToMedium,
    Medium,
    MediumToHigh,
    High,
}

impl ErosionLevel {
    pub const ALL: [ErosionLevel; 5] = [
        ErosionLevel::Low,
        ErosionLevel::LowToMedium,
        ErosionLevel::Medium,
        ErosionLevel::MediumToHigh,
        ErosionLevel::High,
    ];

    /// Position on the ordered scale, 0 (Low) to 4 (High)
    pub fn ordinal(&self) -> u8 {
        match self {
            ErosionLevel::Low => 0,
            ErosionLevel::LowToMedium => 1,
            ErosionLevel::Medium => 2,
            ErosionLevel::MediumToHigh => 3,
            ErosionLevel::High => 4,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }
}

impl std::fmt::Display for ErosionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErosionLevel::Low => write!(f, "Low"),
            ErosionLevel::LowToMedium => write!(f, "Low to Medium"),
            ErosionLevel::Medium => write!(f, "Medium"),
            ErosionLevel::MediumToHigh => write!(f, "Medium to High"),
            ErosionLevel::High => write!(f, "High"),
        }
    }
}

impl FromStr for ErosionLevel {
    type Err = String;

    /// Accepts "low", "Low to Medium", "low_to_medium", "medium-to-high", ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect();
        match normalized.as_str() {
            "low" => Ok(ErosionLevel::Low),
            "low_to_medium" => Ok(ErosionLevel::LowToMedium),
            "medium" => Ok(ErosionLevel::Medium),
            "medium_to_high" => Ok(ErosionLevel::MediumToHigh),
            "high" => Ok(ErosionLevel::High),
            _ => Err(format!("Unknown erosion level: {}", s)),
        }
    }
}

/// Inclusive range of tolerated erosion levels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErosionRange {
    #[serde(default = "lowest_erosion")]
    pub min: ErosionLevel,
    pub max: ErosionLevel,
}

fn lowest_erosion() -> ErosionLevel {
    ErosionLevel::Low
}

impl ErosionRange {
    pub fn new(min: ErosionLevel, max: ErosionLevel) -> Self {
        Self { min, max }
    }

    /// Tolerates anything from `Low` up to `max`
    pub fn up_to(max: ErosionLevel) -> Self {
        Self::new(ErosionLevel::Low, max)
    }

    pub fn contains(&self, level: ErosionLevel) -> bool {
        level >= self.min && level <= self.max
    }
}

impl std::fmt::Display for ErosionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{} - {}", self.min, self.max)
        }
    }
}

/// Static soil attributes for a region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilProfile {
    pub soil_type: String,
    /// 0 (barren) to 100 (very fertile)
    pub fertility_index: Decimal,
    pub erosion: ErosionLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SoilProfile {
    pub fn new(soil_type: impl Into<String>, fertility_index: Decimal, erosion: ErosionLevel) -> Self {
        Self {
            soil_type: soil_type.into(),
            fertility_index,
            erosion,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Coarse label for the fertility index
    pub fn fertility_label(&self) -> &'static str {
        if self.fertility_index >= Decimal::from(70) {
            "High"
        } else if self.fertility_index >= Decimal::from(40) {
            "Medium"
        } else {
            "Low"
        }
    }
}
