//! WebAssembly module for the Crop Advisor
//!
//! Provides client-side computation for:
//! - Ranking the built-in catalog for entered conditions
//! - Climate zone classification
//! - Weather code descriptions

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

use shared::{
    builtin_catalog, classify_climate_zone, rank_crops, GrowingConditions, ScoringWeights,
    WeatherCondition,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("crop advisor wasm loaded"));
}

/// Rank the built-in catalog for JSON-encoded growing conditions
///
/// Returns the ranked recommendations as JSON.
#[wasm_bindgen]
pub fn rank_builtin_crops(conditions_json: &str, limit: Option<u32>) -> Result<String, JsValue> {
    rank_conditions(conditions_json, limit.map(|l| l as usize)).map_err(|e| JsValue::from_str(&e))
}

/// The built-in crop catalog as JSON
#[wasm_bindgen]
pub fn builtin_catalog_json() -> Result<String, JsValue> {
    catalog_json().map_err(|e| JsValue::from_str(&e))
}

/// Climate zone name for a latitude, daily maximum temperature and daily rain
#[wasm_bindgen]
pub fn classify_climate(latitude: f64, max_temperature: f64, precipitation: f64) -> Result<String, JsValue> {
    climate_name(latitude, max_temperature, precipitation).map_err(|e| JsValue::from_str(&e))
}

/// Human-readable text for a WMO weather code
#[wasm_bindgen]
pub fn describe_weather_code(code: u8) -> String {
    WeatherCondition::from_wmo_code(code).description().to_string()
}

fn rank_conditions(conditions_json: &str, limit: Option<usize>) -> Result<String, String> {
    let conditions: GrowingConditions =
        serde_json::from_str(conditions_json).map_err(|e| format!("Invalid conditions JSON: {}", e))?;
    let (weather, soil) = conditions.into_parts();
    let catalog = builtin_catalog().map_err(|e| e.to_string())?;

    let mut ranked =
        rank_crops(&weather, &soil, &catalog, &ScoringWeights::default()).map_err(|e| e.to_string())?;
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    serde_json::to_string(&ranked).map_err(|e| e.to_string())
}

fn catalog_json() -> Result<String, String> {
    let catalog = builtin_catalog().map_err(|e| e.to_string())?;
    serde_json::to_string(catalog.crops()).map_err(|e| e.to_string())
}

fn climate_name(latitude: f64, max_temperature: f64, precipitation: f64) -> Result<String, String> {
    let to_decimal = |name: &str, value: f64| {
        Decimal::try_from(value).map_err(|_| format!("{} is not a finite number", name))
    };
    let zone = classify_climate_zone(
        to_decimal("latitude", latitude)?,
        to_decimal("max_temperature", max_temperature)?,
        to_decimal("precipitation", precipitation)?,
    );
    Ok(zone.to_string())
}
