//! HTTP handlers for the Crop Advisor API

pub mod crops;
pub mod health;
pub mod recommendation;

pub use crops::list_crops;
pub use health::health_check;
pub use recommendation::{get_recommendations, score_conditions};
