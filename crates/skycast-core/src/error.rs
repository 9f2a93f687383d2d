//! Centralized error types for the Skycast application.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides user-friendly messages suitable for UI display
//! - Preserves full error context for debugging/logging

use thiserror::Error;

/// Top-level application error type.
///
/// All errors in the Skycast application should be convertible to this type.
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    ///
    /// These messages are designed to be actionable and non-technical.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Storage(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Local storage errors (persisted settings slots).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to write slot '{slot}': {source}")]
    Write {
        slot: String,
        source: std::io::Error,
    },

    #[error("Failed to serialize slot '{slot}': {source}")]
    Serialize {
        slot: String,
        source: serde_json::Error,
    },
}

impl StorageError {
    pub fn user_message(&self) -> &'static str {
        match self {
            StorageError::Write { .. } => "Failed to save your preferences. Please try again.",
            StorageError::Serialize { .. } => "Failed to save your preferences. Please try again.",
        }
    }
}

/// Weather and geolocation errors as surfaced to the user.
///
/// The fetch layer has its own transport-level taxonomy; these variants are
/// the classified, display-oriented form the dashboard works with.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Weather fetch failed: {0}")]
    FetchFailed(String),

    #[error("Geolocation denied or unavailable")]
    GeolocationDenied,

    #[error("Geolocation not supported")]
    GeolocationUnsupported,
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::LocationNotFound(_) => "Unable to fetch weather data. Check city name.",
            WeatherError::FetchFailed(_) => "Unable to fetch weather data.",
            WeatherError::GeolocationDenied => "Unable to retrieve your location.",
            WeatherError::GeolocationUnsupported => {
                "Geolocation is not supported on this system."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_conversion() {
        let weather_err = WeatherError::GeolocationUnsupported;
        let app_err: AppError = weather_err.into();
        assert!(matches!(
            app_err,
            AppError::Weather(WeatherError::GeolocationUnsupported)
        ));
    }

    #[test]
    fn test_user_message_propagation() {
        let app_err = AppError::Weather(WeatherError::LocationNotFound("Atlantis".into()));
        assert_eq!(
            app_err.user_message(),
            "Unable to fetch weather data. Check city name."
        );
    }

    #[test]
    fn test_storage_error_message() {
        let err = StorageError::Write {
            slot: "theme_settings".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("theme_settings"));
        assert!(!err.user_message().is_empty());
    }
}
