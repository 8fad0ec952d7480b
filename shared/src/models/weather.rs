//! Weather data models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A weather snapshot at the time it was fetched
///
/// `precipitation_mm` is the total accumulated over the look-back window
/// (30 days by default), which is the figure crop rules are written against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub fetched_at: DateTime<Utc>,
    pub temperature_celsius: Decimal,
    pub precipitation_mm: Decimal,
    pub humidity_percent: Decimal,
    /// Present when the snapshot came from the forecast API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<CurrentConditions>,
}

/// Unscored detail from the forecast API, used for climate zone and advice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentConditions {
    pub weather_code: u8,
    pub wind_speed_kmh: Decimal,
    /// Precipitation in the current hour
    pub precipitation_mm: Decimal,
    pub daily_max_temperature_celsius: Decimal,
    pub daily_precipitation_mm: Decimal,
}

impl WeatherSnapshot {
    pub fn new(temperature_celsius: Decimal, precipitation_mm: Decimal, humidity_percent: Decimal) -> Self {
        Self {
            fetched_at: Utc::now(),
            temperature_celsius,
            precipitation_mm,
            humidity_percent,
            conditions: None,
        }
    }

    pub fn with_conditions(mut self, conditions: CurrentConditions) -> Self {
        self.conditions = Some(conditions);
        self
    }

    /// Temperature and precipitation used for climate zone classification:
    /// today's maximum and today's total when known, else the scored values.
    pub fn climate_inputs(&self) -> (Decimal, Decimal) {
        match &self.conditions {
            Some(c) => (c.daily_max_temperature_celsius, c.daily_precipitation_mm),
            None => (self.temperature_celsius, self.precipitation_mm),
        }
    }

    pub fn condition(&self) -> WeatherCondition {
        self.conditions
            .as_ref()
            .map(|c| WeatherCondition::from_wmo_code(c.weather_code))
            .unwrap_or(WeatherCondition::Unknown)
    }
}

/// Weather condition derived from WMO weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    ClearSky,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Foggy,
    DepositingRimeFog,
    LightDrizzle,
    ModerateDrizzle,
    DenseDrizzle,
    SlightRain,
    ModerateRain,
    HeavyRain,
    SlightSnow,
    ModerateSnow,
    HeavySnow,
    SnowGrains,
    SlightRainShowers,
    ModerateRainShowers,
    ViolentRainShowers,
    SlightSnowShowers,
    HeavySnowShowers,
    Thunderstorm,
    ThunderstormSlightHail,
    ThunderstormHeavyHail,
    Unknown,
}

impl WeatherCondition {
    pub fn from_wmo_code(code: u8) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 => Self::Foggy,
            48 => Self::DepositingRimeFog,
            51 => Self::LightDrizzle,
            53 => Self::ModerateDrizzle,
            55 => Self::DenseDrizzle,
            61 => Self::SlightRain,
            63 => Self::ModerateRain,
            65 => Self::HeavyRain,
            71 => Self::SlightSnow,
            73 => Self::ModerateSnow,
            75 => Self::HeavySnow,
            77 => Self::SnowGrains,
            80 => Self::SlightRainShowers,
            81 => Self::ModerateRainShowers,
            82 => Self::ViolentRainShowers,
            85 => Self::SlightSnowShowers,
            86 => Self::HeavySnowShowers,
            95 => Self::Thunderstorm,
            96 => Self::ThunderstormSlightHail,
            99 => Self::ThunderstormHeavyHail,
            _ => Self::Unknown,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::MainlyClear => "Mainly clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Foggy => "Foggy",
            Self::DepositingRimeFog => "Depositing rime fog",
            Self::LightDrizzle => "Light drizzle",
            Self::ModerateDrizzle => "Moderate drizzle",
            Self::DenseDrizzle => "Dense drizzle",
            Self::SlightRain => "Slight rain",
            Self::ModerateRain => "Moderate rain",
            Self::HeavyRain => "Heavy rain",
            Self::SlightSnow => "Slight snow",
            Self::ModerateSnow => "Moderate snow",
            Self::HeavySnow => "Heavy snow",
            Self::SnowGrains => "Snow grains",
            Self::SlightRainShowers => "Slight rain showers",
            Self::ModerateRainShowers => "Moderate rain showers",
            Self::ViolentRainShowers => "Violent rain showers",
            Self::SlightSnowShowers => "Slight snow showers",
            Self::HeavySnowShowers => "Heavy snow showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::ThunderstormSlightHail => "Thunderstorm with slight hail",
            Self::ThunderstormHeavyHail => "Thunderstorm with heavy hail",
            Self::Unknown => "Unknown",
        }
    }

    /// Rain or rain showers
    pub fn is_rain(&self) -> bool {
        matches!(
            self,
            Self::SlightRain
                | Self::ModerateRain
                | Self::HeavyRain
                | Self::SlightRainShowers
                | Self::ModerateRainShowers
                | Self::ViolentRainShowers
        )
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
