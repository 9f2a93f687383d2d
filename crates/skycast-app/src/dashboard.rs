//! Dashboard view-model.
//!
//! Owns the transient session state the rendering shell binds to: loading
//! flag, user-visible error, current conditions, forecast samples, the
//! recent-city list and the unit preference. Weather data is never
//! persisted; only preferences and recent cities survive a restart.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use skycast_core::{AppError, RecentCities, SettingsStore, UnitPreference};
use skycast_weather::{
    units, CurrentWeather, ForecastDay, LocationError, PositionProvider, WeatherBundle,
    WeatherClient, WeatherError,
};

use crate::error_mapping::{map_fetch_error, map_location_error, FetchOrigin};

/// Snapshot of the dashboard state.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub loading: bool,
    pub error: Option<String>,
    pub current: Option<CurrentWeather>,
    pub forecast: Vec<ForecastDay>,
    pub recent_cities: Vec<String>,
    pub unit: UnitPreference,
}

pub struct Dashboard {
    client: WeatherClient,
    position: Arc<dyn PositionProvider>,
    settings: SettingsStore,
    recent: RecentCities,
    state: Mutex<ViewState>,
    // Monotonic tag per fetch; outcomes carrying an older tag are discarded
    // so a slow response cannot overwrite a newer one.
    generation: AtomicU64,
}

impl Dashboard {
    pub fn new(
        client: WeatherClient,
        position: Arc<dyn PositionProvider>,
        settings: SettingsStore,
        recent: RecentCities,
    ) -> Self {
        let unit = settings.load_unit();
        Self {
            client,
            position,
            settings,
            recent,
            state: Mutex::new(ViewState {
                unit,
                ..ViewState::default()
            }),
            generation: AtomicU64::new(0),
        }
    }

    /// Load the persisted recent-city list into view state. Returns the most
    /// recent stored city for auto-fetch; `None` on first run, where only the
    /// seed list is shown.
    pub fn bootstrap(&self) -> Option<String> {
        let stored = self.recent.stored();
        let initial = stored.as_ref().and_then(|list| list.first().cloned());
        self.state.lock().recent_cities = self.recent.load();
        initial
    }

    pub fn state(&self) -> ViewState {
        self.state.lock().clone()
    }

    /// Search by city name. Empty or whitespace-only input is a silent no-op:
    /// no request is issued and no state changes.
    pub async fn search(&self, raw: &str) {
        let city = raw.trim().to_string();
        if city.is_empty() {
            tracing::debug!("Ignoring empty search input");
            return;
        }

        let generation = self.begin_fetch();
        let outcome = self.client.fetch_by_name(&city).await;
        self.finish_fetch(generation, outcome, FetchOrigin::CityQuery);
    }

    /// Fetch weather for the device position. Capability and position errors
    /// surface before any weather request is issued.
    pub async fn use_current_location(&self) {
        if !self.position.is_available() {
            self.publish_error(map_location_error(LocationError::Unsupported));
            return;
        }

        let coords = match self.position.current_position().await {
            Ok(coords) => coords,
            Err(e) => {
                tracing::debug!("Position request failed: {}", e);
                self.publish_error(map_location_error(e));
                return;
            }
        };

        let generation = self.begin_fetch();
        let outcome = self.client.fetch_by_coords(coords).await;
        self.finish_fetch(generation, outcome, FetchOrigin::Coordinates);
    }

    /// Flip the unit preference and persist it. Display-only: canonical data
    /// stays metric.
    pub fn toggle_unit(&self) -> UnitPreference {
        let next = {
            let mut state = self.state.lock();
            state.unit = state.unit.toggled();
            state.unit
        };
        if let Err(e) = self.settings.save_unit(next) {
            tracing::warn!("Failed to persist unit preference: {}", e);
        }
        next
    }

    /// Canonical Celsius converted for the active unit.
    pub fn convert_temperature(&self, celsius: f64) -> f64 {
        match self.state.lock().unit {
            UnitPreference::Metric => celsius,
            UnitPreference::Imperial => units::celsius_to_fahrenheit(celsius),
        }
    }

    /// Canonical m/s converted for the active unit.
    pub fn convert_wind_speed(&self, mps: f64) -> f64 {
        match self.state.lock().unit {
            UnitPreference::Metric => mps,
            UnitPreference::Imperial => units::mps_to_mph(mps),
        }
    }

    pub fn format_temperature(&self, celsius: f64) -> String {
        let value = self.convert_temperature(celsius);
        match self.state.lock().unit {
            UnitPreference::Metric => format!("{:.0}°C", value),
            UnitPreference::Imperial => format!("{:.0}°F", value),
        }
    }

    pub fn format_wind_speed(&self, mps: f64) -> String {
        let value = self.convert_wind_speed(mps);
        match self.state.lock().unit {
            UnitPreference::Metric => format!("{:.1} m/s", value),
            UnitPreference::Imperial => format!("{:.1} mph", value),
        }
    }

    fn begin_fetch(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.state.lock();
        state.loading = true;
        state.error = None;
        generation
    }

    fn finish_fetch(
        &self,
        generation: u64,
        outcome: Result<WeatherBundle, WeatherError>,
        origin: FetchOrigin,
    ) {
        if generation != self.generation.load(Ordering::SeqCst) {
            // A newer fetch owns the loading flag and the result slots.
            tracing::debug!("Discarding stale fetch result (generation {})", generation);
            return;
        }

        match outcome {
            Ok(bundle) => {
                let recent = self.recent.record(&bundle.current.city);
                let mut state = self.state.lock();
                state.loading = false;
                state.error = None;
                state.recent_cities = recent;
                state.current = Some(bundle.current);
                state.forecast = bundle.daily;
            }
            Err(e) => {
                tracing::debug!("Fetch failed: {}", e);
                let message = map_fetch_error(e, origin).user_message().to_string();
                let mut state = self.state.lock();
                state.loading = false;
                state.error = Some(message);
            }
        }
    }

    fn publish_error(&self, err: AppError) {
        self.state.lock().error = Some(err.user_message().to_string());
    }
}
