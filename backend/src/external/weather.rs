//! Weather API client
//!
//! Integrates with the Open-Meteo forecast API. Current temperature and
//! humidity are scored as-is; precipitation is the sum of the daily totals
//! over the configured window, today included.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{validate_precipitation_window, CurrentConditions, GpsCoordinates, WeatherSnapshot};
use tracing::{debug, instrument};

use super::{check_status, decimal_from_api, ExternalError};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,precipitation,weather_code,wind_speed_10m";
const DAILY_FIELDS: &str = "temperature_2m_max,precipitation_sum";

/// Fetches a weather snapshot for a location
#[async_trait]
pub trait WeatherClient: Send + Sync {
    async fn snapshot(&self, coordinates: &GpsCoordinates) -> Result<WeatherSnapshot, ExternalError>;
}

/// Open-Meteo forecast API client
#[derive(Debug, Clone)]
pub struct OpenMeteoWeatherClient {
    client: Client,
    base_url: String,
    window_days: u16,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentData,
    daily: DailyData,
}

#[derive(Debug, Deserialize)]
struct CurrentData {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    precipitation: f64,
    weather_code: u8,
    wind_speed_10m: f64,
}

#[derive(Debug, Deserialize)]
struct DailyData {
    temperature_2m_max: Vec<Option<f64>>,
    precipitation_sum: Vec<Option<f64>>,
}

impl OpenMeteoWeatherClient {
    /// `window_days` must be between 1 and 30
    pub fn new(client: Client, base_url: impl Into<String>, window_days: u16) -> Result<Self, ExternalError> {
        validate_precipitation_window(window_days).map_err(|e| ExternalError::RequestFailed(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            window_days,
        })
    }

    pub fn window_days(&self) -> u16 {
        self.window_days
    }

    fn convert_response(&self, data: ForecastResponse) -> Result<WeatherSnapshot, ExternalError> {
        let mut precipitation_total = Decimal::ZERO;
        let mut today_precipitation = None;
        for (day, value) in data.daily.precipitation_sum.iter().enumerate() {
            let value = value.ok_or_else(|| {
                ExternalError::ParseError(format!("Missing precipitation total for day {}", day))
            })?;
            let value = decimal_from_api("precipitation_sum", value)?;
            precipitation_total += value;
            today_precipitation = Some(value);
        }
        let today_precipitation = today_precipitation
            .ok_or_else(|| ExternalError::ParseError("Response has no daily precipitation".to_string()))?;

        let today_max = data
            .daily
            .temperature_2m_max
            .last()
            .copied()
            .flatten()
            .ok_or_else(|| ExternalError::ParseError("Missing daily maximum temperature".to_string()))?;

        let conditions = CurrentConditions {
            weather_code: data.current.weather_code,
            wind_speed_kmh: decimal_from_api("wind_speed_10m", data.current.wind_speed_10m)?,
            precipitation_mm: decimal_from_api("precipitation", data.current.precipitation)?,
            daily_max_temperature_celsius: decimal_from_api("temperature_2m_max", today_max)?,
            daily_precipitation_mm: today_precipitation,
        };

        Ok(WeatherSnapshot::new(
            decimal_from_api("temperature_2m", data.current.temperature_2m)?,
            precipitation_total,
            decimal_from_api("relative_humidity_2m", data.current.relative_humidity_2m)?,
        )
        .with_conditions(conditions))
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoWeatherClient {
    #[instrument(skip(self), fields(window_days = self.window_days))]
    async fn snapshot(&self, coordinates: &GpsCoordinates) -> Result<WeatherSnapshot, ExternalError> {
        let url = format!("{}/forecast", self.base_url);
        let past_days = (self.window_days - 1).to_string();
        let latitude = coordinates.latitude.to_string();
        let longitude = coordinates.longitude.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current", CURRENT_FIELDS),
                ("daily", DAILY_FIELDS),
                ("past_days", past_days.as_str()),
                ("forecast_days", "1"),
                ("timezone", "auto"),
            ])
            .send()
            .await?;
        let response = check_status("weather", response).await?;

        let data: ForecastResponse = response
            .json()
            .await
            .map_err(|e| ExternalError::ParseError(format!("Failed to parse weather response: {}", e)))?;

        let snapshot = self.convert_response(data)?;
        debug!(
            temperature = %snapshot.temperature_celsius,
            precipitation = %snapshot.precipitation_mm,
            humidity = %snapshot.humidity_percent,
            "Fetched weather snapshot"
        );
        Ok(snapshot)
    }
}
