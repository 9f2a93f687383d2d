//! OpenWeatherMap fetch client.
//!
//! Each fetch is a strictly sequenced pair of GETs: current conditions
//! first, then the forecast only if the first call succeeded. The API is
//! always queried in metric units.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{CurrentResponse, ForecastResponse};
use crate::forecast::stride_sample;
use crate::types::{Coordinates, CurrentWeather, ForecastDay, WeatherBundle, WeatherError};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Location selector for one fetch sequence.
enum Place<'a> {
    Name(&'a str),
    Coords(Coordinates),
}

impl Place<'_> {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Place::Name(name) => vec![("q", (*name).to_string())],
            Place::Coords(coords) => vec![
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
            ],
        }
    }

    fn describe(&self) -> String {
        match self {
            Place::Name(name) => (*name).to_string(),
            Place::Coords(coords) => {
                format!("{:.4},{:.4}", coords.latitude, coords.longitude)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Arc<Client>,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    /// Create a client against the given API base URL (no trailing slash
    /// required), e.g. `https://api.openweathermap.org/data/2.5`.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, WeatherError> {
        Url::parse(base_url)
            .map_err(|e| WeatherError::Parse(format!("invalid base URL: {}", e)))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http: Arc::new(http),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Fetch current conditions and forecast for a free-text city query.
    pub async fn fetch_by_name(&self, city: &str) -> Result<WeatherBundle, WeatherError> {
        self.fetch(Place::Name(city)).await
    }

    /// Fetch current conditions and forecast for a coordinate pair.
    pub async fn fetch_by_coords(
        &self,
        coords: Coordinates,
    ) -> Result<WeatherBundle, WeatherError> {
        self.fetch(Place::Coords(coords)).await
    }

    async fn fetch(&self, place: Place<'_>) -> Result<WeatherBundle, WeatherError> {
        tracing::info!("Fetching weather for {}", place.describe());
        let current = self.current(&place).await?;

        // Current conditions resolved; a failed forecast call degrades to a
        // partial bundle rather than discarding the whole result.
        let daily = match self.forecast(&place).await {
            Ok(daily) => daily,
            Err(e) => {
                tracing::warn!("Forecast fetch failed, keeping current only: {}", e);
                Vec::new()
            }
        };

        tracing::info!(
            "Weather for {} resolved with {} forecast days",
            current.city,
            daily.len()
        );
        Ok(WeatherBundle { current, daily })
    }

    async fn current(&self, place: &Place<'_>) -> Result<CurrentWeather, WeatherError> {
        let body: CurrentResponse = self.get_json("weather", place).await?;
        body.into_current()
    }

    async fn forecast(&self, place: &Place<'_>) -> Result<Vec<ForecastDay>, WeatherError> {
        let body: ForecastResponse = self.get_json("forecast", place).await?;
        stride_sample(body.list)
            .into_iter()
            .map(|slot| slot.into_day())
            .collect()
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        place: &Place<'_>,
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{}", self.base_url, path);
        let mut query = place.query_pairs();
        query.push(("appid", self.api_key.clone()));
        query.push(("units", "metric".to_string()));

        let response = self.http.get(&url).query(&query).send().await?;

        if !response.status().is_success() {
            tracing::debug!(
                "{} returned status {} for {}",
                path,
                response.status(),
                place.describe()
            );
            return Err(WeatherError::NotFound {
                query: place.describe(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                WeatherError::Parse(e.to_string())
            } else {
                WeatherError::Network(e)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = WeatherClient::new("not a url", "key");
        assert!(matches!(result, Err(WeatherError::Parse(_))));
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let client =
            WeatherClient::new("https://api.openweathermap.org/data/2.5/", "key").expect("client");
        assert_eq!(client.base_url, "https://api.openweathermap.org/data/2.5");
    }
}
