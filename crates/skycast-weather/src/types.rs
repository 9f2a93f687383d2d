use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Coarse weather condition category derived from the API's condition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConditionKind {
    Clear,
    Clouds,
    Rain,
    Snow,
    #[default]
    Other,
}

impl ConditionKind {
    /// Categorize a condition label ("Clear", "light rain", ...) by
    /// case-insensitive substring match. Unknown labels map to `Other`.
    pub fn from_label(label: &str) -> Self {
        let lowered = label.to_lowercase();
        if lowered.contains("clear") {
            Self::Clear
        } else if lowered.contains("cloud") {
            Self::Clouds
        } else if lowered.contains("rain") || lowered.contains("drizzle") {
            Self::Rain
        } else if lowered.contains("snow") {
            Self::Snow
        } else {
            Self::Other
        }
    }
}

/// Current conditions for a resolved location.
///
/// Temperature and wind speed are canonical metric values (Celsius, m/s);
/// display conversion happens in the view layer, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Canonical city name as resolved by the API
    pub city: String,
    /// ISO country code
    pub country: String,
    /// Condition label, e.g. "Clouds"
    pub condition: String,
    /// Longer condition description, e.g. "scattered clouds"
    pub description: String,
    pub temperature_c: f64,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Pressure in hPa
    pub pressure_hpa: u32,
    /// Wind speed in m/s
    pub wind_mps: f64,
    /// Visibility in meters
    pub visibility_m: u32,
    /// Sunrise as epoch seconds (UTC)
    pub sunrise: i64,
    /// Sunset as epoch seconds (UTC)
    pub sunset: i64,
}

impl CurrentWeather {
    pub fn condition_kind(&self) -> ConditionKind {
        ConditionKind::from_label(&self.condition)
    }

    pub fn sunrise_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.sunrise, 0)
    }

    pub fn sunset_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.sunset, 0)
    }
}

/// One sampled forecast entry, roughly a day apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Forecast time as epoch seconds (UTC)
    pub timestamp: i64,
    /// Condition label, e.g. "Rain"
    pub condition: String,
    /// Longer condition description
    pub description: String,
    pub temperature_c: f64,
}

impl ForecastDay {
    pub fn condition_kind(&self) -> ConditionKind {
        ConditionKind::from_label(&self.condition)
    }

    /// Short weekday label ("Mon", "Tue", ...) for the forecast timestamp.
    pub fn weekday_label(&self) -> String {
        DateTime::from_timestamp(self.timestamp, 0)
            .map(|t| t.format("%a").to_string())
            .unwrap_or_default()
    }
}

/// Complete result of one fetch sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherBundle {
    pub current: CurrentWeather,
    /// Daily samples, most 5, possibly empty when the forecast call failed
    pub daily: Vec<ForecastDay>,
}

/// Transport-level fetch errors.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Location not found: {query}")]
    NotFound { query: String },
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Malformed response: {0}")]
    Parse(String),
}
