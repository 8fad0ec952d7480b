//! External API integrations

use std::time::Duration;

use reqwest::Client;
use rust_decimal::Decimal;
use thiserror::Error;

pub mod geocoding;
pub mod weather;

pub use geocoding::{GeocodingClient, OpenMeteoGeocodingClient};
pub use weather::{OpenMeteoWeatherClient, WeatherClient};

/// Upstream call failures
///
/// Every variant is terminal for the request that hit it.
#[derive(Debug, Error)]
pub enum ExternalError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("No location found for \"{0}\"")]
    NotFound(String),
}

impl From<reqwest::Error> for ExternalError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ExternalError::Timeout(err.to_string())
        } else if err.is_decode() {
            ExternalError::ParseError(err.to_string())
        } else {
            ExternalError::RequestFailed(err.to_string())
        }
    }
}

/// HTTP client with the bounded timeout both upstream clients share
pub fn build_http_client(timeout_secs: u64) -> Result<Client, ExternalError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("crop-advisor/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ExternalError::RequestFailed(e.to_string()))
}

/// Convert an API float into a Decimal, refusing NaN and infinities
pub(crate) fn decimal_from_api(field: &str, value: f64) -> Result<Decimal, ExternalError> {
    Decimal::try_from(value)
        .map(|d| d.round_dp(2))
        .map_err(|_| ExternalError::ParseError(format!("{} is not a finite number: {}", field, value)))
}

/// Map a non-success status into an error, keeping the body for the log
async fn check_status(service: &str, response: reqwest::Response) -> Result<reqwest::Response, ExternalError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!(service, %status, body = %body, "Upstream returned an error status");
    if status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        Err(ExternalError::ServiceUnavailable(format!("{} returned {}", service, status)))
    } else {
        Err(ExternalError::RequestFailed(format!("{} returned {}", service, status)))
    }
}
