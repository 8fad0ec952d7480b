//! Recommendation service
//!
//! One linear flow per request: resolve the region, fetch weather, look up
//! soil, classify the climate zone, rank the catalog and write the advice.
//! Any upstream failure ends the request; nothing is retried or guessed.

use std::sync::Arc;

use chrono::Utc;
use shared::{
    build_advice, classify_climate_zone, validate_region_query, CropCatalog, CropScorer,
    GrowingConditions, Recommendation, RecommendationReport, RuleBasedScorer,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::external::{
    build_http_client, GeocodingClient, OpenMeteoGeocodingClient, OpenMeteoWeatherClient, WeatherClient,
};
use crate::services::catalog::load_catalog;
use crate::services::soil::{SoilProfileLookup, StaticSoilLookup};

/// Orchestrates the upstream clients and the scorer
#[derive(Clone)]
pub struct RecommendationService {
    geocoder: Arc<dyn GeocodingClient>,
    weather: Arc<dyn WeatherClient>,
    soil: Arc<dyn SoilProfileLookup>,
    scorer: Arc<dyn CropScorer>,
    catalog: Arc<CropCatalog>,
    default_limit: Option<usize>,
}

impl RecommendationService {
    pub fn new(
        geocoder: Arc<dyn GeocodingClient>,
        weather: Arc<dyn WeatherClient>,
        soil: Arc<dyn SoilProfileLookup>,
        scorer: Arc<dyn CropScorer>,
        catalog: Arc<CropCatalog>,
    ) -> Self {
        Self {
            geocoder,
            weather,
            soil,
            scorer,
            catalog,
            default_limit: None,
        }
    }

    pub fn with_default_limit(mut self, limit: Option<usize>) -> Self {
        self.default_limit = limit;
        self
    }

    /// Build the service with Open-Meteo clients and the configured catalog
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let http = build_http_client(config.http.timeout_secs)
            .map_err(|e| AppError::Configuration(e.to_string()))?;
        let geocoder = OpenMeteoGeocodingClient::new(http.clone(), config.geocoding.base_url.clone());
        let weather = OpenMeteoWeatherClient::new(
            http,
            config.weather.base_url.clone(),
            config.weather.precipitation_window_days,
        )
        .map_err(|e| AppError::Configuration(e.to_string()))?;
        let soil = StaticSoilLookup::new(config.soil.overrides.clone())?;
        let scorer = RuleBasedScorer::new(config.scoring.weights.clone())
            .map_err(|e| AppError::Configuration(e.to_string()))?;
        let catalog = load_catalog(config.catalog.path.as_deref())?;

        Ok(Self::new(
            Arc::new(geocoder),
            Arc::new(weather),
            Arc::new(soil),
            Arc::new(scorer),
            Arc::new(catalog),
        )
        .with_default_limit(config.scoring.default_limit))
    }

    pub fn catalog(&self) -> &CropCatalog {
        &self.catalog
    }

    /// Full report for a named region
    #[instrument(skip(self))]
    pub async fn recommend(&self, region_query: &str, limit: Option<usize>) -> AppResult<RecommendationReport> {
        validate_region_query(region_query)?;
        let limit = self.effective_limit(limit)?;
        let query = region_query.trim();

        let region = self.geocoder.resolve(query).await.map_err(|e| {
            warn!(error = %e, "Region lookup failed");
            AppError::from(e)
        })?;
        info!(region = %region.name, coordinates = %region.coordinates, "Region resolved");

        let weather = self.weather.snapshot(&region.coordinates).await.map_err(|e| {
            warn!(error = %e, "Weather fetch failed");
            AppError::from(e)
        })?;

        let (max_temperature, today_precipitation) = weather.climate_inputs();
        let climate_zone = classify_climate_zone(region.coordinates.latitude, max_temperature, today_precipitation);
        let soil = self.soil.profile_for(&region, climate_zone)?;

        let mut recommendations = self.scorer.rank(&weather, &soil, &self.catalog)?;
        let advice = build_advice(&weather, &soil, &recommendations);
        if let Some(limit) = limit {
            recommendations.truncate(limit);
        }
        info!(
            zone = %climate_zone,
            soil = %soil.soil_type,
            top = recommendations.first().map(|r| r.crop.as_str()).unwrap_or_default(),
            "Recommendation ready"
        );

        Ok(RecommendationReport {
            id: Uuid::new_v4(),
            region,
            weather,
            soil,
            climate_zone,
            recommendations,
            advice,
            generated_at: Utc::now(),
        })
    }

    /// Rank caller-supplied conditions without any upstream call
    pub fn score(&self, conditions: GrowingConditions, limit: Option<usize>) -> AppResult<Vec<Recommendation>> {
        let limit = self.effective_limit(limit)?;
        let (weather, soil) = conditions.into_parts();
        let mut recommendations = self.scorer.rank(&weather, &soil, &self.catalog)?;
        if let Some(limit) = limit {
            recommendations.truncate(limit);
        }
        Ok(recommendations)
    }

    fn effective_limit(&self, limit: Option<usize>) -> AppResult<Option<usize>> {
        match limit.or(self.default_limit) {
            Some(0) => Err(AppError::invalid("limit", "Limit must be at least 1")),
            other => Ok(other),
        }
    }
}
