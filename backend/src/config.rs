//! Configuration management for the Crop Advisor
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides, `AGRI__<SECTION>__<KEY>`

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{ErosionLevel, ScoringWeights};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Geocoding API configuration
    pub geocoding: GeocodingConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Outbound HTTP settings shared by both upstream clients
    pub http: HttpConfig,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub soil: SoilConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingConfig {
    /// Base URL of the Open-Meteo geocoding API
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Base URL of the Open-Meteo forecast API
    pub base_url: String,

    /// Days of past precipitation summed into the scored total (1-30)
    pub precipitation_window_days: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: ScoringWeights,

    /// Number of crops returned when the caller gives no limit
    pub default_limit: Option<usize>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// TOML file with `[[crops]]` entries; the built-in catalog is used when unset
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SoilConfig {
    #[serde(default)]
    pub overrides: Vec<SoilOverride>,
}

/// Surveyed soil for a named region, taking precedence over the latitude band table
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SoilOverride {
    /// Matched case-insensitively against the resolved region name or the search text
    pub region: String,
    pub soil_type: String,
    pub fertility: rust_decimal::Decimal,
    pub erosion: ErosionLevel,
    pub notes: Option<String>,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = Self::defaults(config::Config::builder(), &environment)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI__ prefix)
            .add_source(Self::environment_source())
            .build()?;

        config.try_deserialize()
    }

    /// Configuration made of code defaults only
    pub fn from_defaults() -> Result<Self, ConfigError> {
        Self::defaults(config::Config::builder(), "development")?
            .build()?
            .try_deserialize()
    }

    /// `AGRI__SERVER__PORT=8080` sets `server.port`
    fn environment_source() -> Environment {
        Environment::with_prefix("AGRI").separator("__").try_parsing(true)
    }

    fn defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        environment: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            .set_default("environment", environment)?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("geocoding.base_url", "https://geocoding-api.open-meteo.com/v1")?
            .set_default("weather.base_url", "https://api.open-meteo.com/v1")?
            .set_default("weather.precipitation_window_days", 30)?
            .set_default("http.timeout_secs", 10)
    }
}
