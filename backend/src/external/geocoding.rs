//! Geocoding client
//!
//! Resolves free-text region names to coordinates with the Open-Meteo
//! geocoding API. Only the best match is used.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shared::{format_region_name, GpsCoordinates, Region};
use tracing::{debug, instrument};

use super::{check_status, decimal_from_api, ExternalError};

/// Resolves a region name to a location
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    async fn resolve(&self, query: &str) -> Result<Region, ExternalError>;
}

/// Open-Meteo geocoding API client
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocodingClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Option<Vec<SearchResult>>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    name: String,
    latitude: f64,
    longitude: f64,
    admin1: Option<String>,
    country: Option<String>,
}

impl OpenMeteoGeocodingClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl GeocodingClient for OpenMeteoGeocodingClient {
    #[instrument(skip(self))]
    async fn resolve(&self, query: &str) -> Result<Region, ExternalError> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("name", query), ("count", "1"), ("language", "en"), ("format", "json")])
            .send()
            .await?;
        let response = check_status("geocoding", response).await?;

        let data: SearchResponse = response
            .json()
            .await
            .map_err(|e| ExternalError::ParseError(format!("Failed to parse geocoding response: {}", e)))?;

        let best = data
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| ExternalError::NotFound(query.to_string()))?;

        let coordinates = GpsCoordinates::new(
            decimal_from_api("latitude", best.latitude)?,
            decimal_from_api("longitude", best.longitude)?,
        );
        let name = format_region_name(&best.name, best.admin1.as_deref(), best.country.as_deref());
        debug!(%name, %coordinates, "Resolved region");

        Ok(Region::new(name, query, coordinates))
    }
}
