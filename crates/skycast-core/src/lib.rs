pub mod config;
pub mod error;
pub mod recent;
pub mod settings;
pub mod store;

pub use config::{ApiConfig, Config};
pub use error::{AppError, StorageError, WeatherError};
pub use recent::RecentCities;
pub use settings::{
    ColorScheme, SettingsStore, ThemeMode, ThemeSettings, UnitPreference,
};
pub use store::LocalStore;

use anyhow::Result;

/// Initialize the core application
pub fn init() -> Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Skycast core initialized");
    Ok(())
}
