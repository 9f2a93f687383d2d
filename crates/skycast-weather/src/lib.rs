//! Weather service for Skycast
//!
//! Fetches current conditions and the 5-day forecast from the OpenWeatherMap
//! API, normalizes the 3-hourly forecast series to daily samples, and exposes
//! a geolocation seam for coordinate-based lookups.

pub mod client;
pub mod forecast;
pub mod location;
pub mod types;
pub mod units;

mod api;

pub use client::WeatherClient;
pub use forecast::stride_sample;
pub use location::{LocationError, PositionProvider, SystemPositionProvider};
pub use types::*;
