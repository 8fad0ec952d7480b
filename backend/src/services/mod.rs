//! Business logic services for the Crop Advisor

pub mod catalog;
pub mod recommendation;
pub mod soil;

pub use catalog::load_catalog;
pub use recommendation::RecommendationService;
pub use soil::{SoilProfileLookup, StaticSoilLookup};
