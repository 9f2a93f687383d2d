//! Raw OpenWeatherMap response shapes.
//!
//! Deserialization targets only; the client maps these into the domain types
//! immediately after parsing.

use serde::Deserialize;

use crate::types::{CurrentWeather, ForecastDay, WeatherError};

#[derive(Debug, Deserialize)]
pub(crate) struct ConditionSlot {
    pub main: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentResponse {
    pub name: String,
    pub sys: SysSection,
    pub weather: Vec<ConditionSlot>,
    pub main: MainReadings,
    pub wind: WindSection,
    #[serde(default)]
    pub visibility: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SysSection {
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MainReadings {
    pub temp: f64,
    pub humidity: u8,
    pub pressure: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WindSection {
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub list: Vec<ForecastSlot>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastSlot {
    pub dt: i64,
    pub weather: Vec<ConditionSlot>,
    pub main: SlotReadings,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SlotReadings {
    pub temp: f64,
}

impl CurrentResponse {
    pub(crate) fn into_current(self) -> Result<CurrentWeather, WeatherError> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Parse("current response has no condition".into()))?;

        Ok(CurrentWeather {
            city: self.name,
            country: self.sys.country,
            condition: condition.main,
            description: condition.description,
            temperature_c: self.main.temp,
            humidity: self.main.humidity,
            pressure_hpa: self.main.pressure,
            wind_mps: self.wind.speed,
            visibility_m: self.visibility,
            sunrise: self.sys.sunrise,
            sunset: self.sys.sunset,
        })
    }
}

impl ForecastSlot {
    pub(crate) fn into_day(self) -> Result<ForecastDay, WeatherError> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Parse("forecast slot has no condition".into()))?;

        Ok(ForecastDay {
            timestamp: self.dt,
            condition: condition.main,
            description: condition.description,
            temperature_c: self.main.temp,
        })
    }
}
