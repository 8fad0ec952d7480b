//! Shared types and logic for the Crop Advisor
//!
//! Everything here is pure: no I/O, no global state. The backend, the CLI
//! and the WASM bindings all rank crops through this crate.

pub mod advisory;
pub mod catalog;
pub mod climate;
pub mod error;
pub mod models;
pub mod scoring;
pub mod types;
pub mod validation;

pub use advisory::build_advice;
pub use catalog::{builtin_catalog, builtin_crop_rules};
pub use climate::{band_soil_profile, classify_climate_zone, ClimateZone};
pub use error::{ScoringError, ScoringResult};
pub use models::*;
pub use scoring::{penalty_breakdown, rank_crops, score_rule, CropScorer, RuleBasedScorer, ScoringWeights};
pub use types::*;
pub use validation::*;
