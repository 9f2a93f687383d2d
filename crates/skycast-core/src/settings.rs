//! Persisted appearance and unit preferences.
//!
//! The theme settings are stored as a single JSON blob; the unit preference
//! lives in its own slot with an independent lifecycle. Loads never fail:
//! absent, malformed or partial blobs fall back to defaults field by field.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::store::LocalStore;

/// Slot holding the serialized theme settings blob.
pub const THEME_SETTINGS_SLOT: &str = "theme_settings";

/// Slot holding the bare unit preference string.
pub const WEATHER_UNIT_SLOT: &str = "weather_unit";

/// Theme mode preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Accent color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Blue,
    Purple,
    Green,
    Orange,
}

/// Measurement system for display. Raw API data is always metric; imperial
/// is a pure display transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitPreference {
    #[default]
    Metric,
    Imperial,
}

impl UnitPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            UnitPreference::Metric => "metric",
            UnitPreference::Imperial => "imperial",
        }
    }

    /// Parse a stored unit string. Unrecognized values fall back to metric.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "imperial" => UnitPreference::Imperial,
            _ => UnitPreference::Metric,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            UnitPreference::Metric => UnitPreference::Imperial,
            UnitPreference::Imperial => UnitPreference::Metric,
        }
    }
}

/// The persisted appearance settings blob.
///
/// Serialized with camelCase field names, so stored blobs read
/// `{"mode":"system","colorScheme":"blue","reducedMotion":false}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    #[serde(default)]
    pub mode: ThemeMode,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Store for theme settings and the unit preference.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    store: LocalStore,
}

impl SettingsStore {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Load the stored settings, falling back to defaults when the slot is
    /// absent or unparseable. Never fails.
    pub fn load(&self) -> ThemeSettings {
        self.store
            .get_json(THEME_SETTINGS_SLOT)
            .unwrap_or_default()
    }

    /// Persist the full settings blob. Immediately visible to `load`.
    pub fn save(&self, settings: &ThemeSettings) -> Result<(), StorageError> {
        self.store.set_json(THEME_SETTINGS_SLOT, settings)
    }

    /// Update only the mode, leaving the other fields untouched.
    pub fn set_mode(&self, mode: ThemeMode) -> Result<ThemeSettings, StorageError> {
        let mut settings = self.load();
        settings.mode = mode;
        self.save(&settings)?;
        Ok(settings)
    }

    /// Update only the color scheme, leaving the other fields untouched.
    pub fn set_color_scheme(&self, scheme: ColorScheme) -> Result<ThemeSettings, StorageError> {
        let mut settings = self.load();
        settings.color_scheme = scheme;
        self.save(&settings)?;
        Ok(settings)
    }

    /// Update only the reduced-motion flag, leaving the other fields untouched.
    pub fn set_reduced_motion(&self, reduced: bool) -> Result<ThemeSettings, StorageError> {
        let mut settings = self.load();
        settings.reduced_motion = reduced;
        self.save(&settings)?;
        Ok(settings)
    }

    /// Load the unit preference from its own slot.
    pub fn load_unit(&self) -> UnitPreference {
        self.store
            .get(WEATHER_UNIT_SLOT)
            .map(|s| UnitPreference::parse(&s))
            .unwrap_or_default()
    }

    /// Persist the unit preference to its own slot.
    pub fn save_unit(&self, unit: UnitPreference) -> Result<(), StorageError> {
        self.store.set(WEATHER_UNIT_SLOT, unit.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_store() -> (tempfile::TempDir, SettingsStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::new(LocalStore::new(dir.path().join("store")));
        (dir, store)
    }

    #[test]
    fn test_load_absent_returns_defaults() {
        let (_dir, store) = settings_store();
        let settings = store.load();
        assert_eq!(settings.mode, ThemeMode::System);
        assert_eq!(settings.color_scheme, ColorScheme::Blue);
        assert!(!settings.reduced_motion);
    }

    #[test]
    fn test_load_malformed_returns_defaults() {
        let (_dir, store) = settings_store();
        store
            .store
            .set(THEME_SETTINGS_SLOT, "{\"mode\": nonsense")
            .expect("set");
        assert_eq!(store.load(), ThemeSettings::default());
    }

    #[test]
    fn test_partial_blob_fills_defaults() {
        let (_dir, store) = settings_store();
        store
            .store
            .set(THEME_SETTINGS_SLOT, r#"{"mode":"dark"}"#)
            .expect("set");
        let settings = store.load();
        assert_eq!(settings.mode, ThemeMode::Dark);
        assert_eq!(settings.color_scheme, ColorScheme::Blue);
        assert!(!settings.reduced_motion);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let (_dir, store) = settings_store();
        let settings = ThemeSettings {
            mode: ThemeMode::Light,
            color_scheme: ColorScheme::Orange,
            reduced_motion: true,
        };
        store.save(&settings).expect("save");
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn test_blob_uses_camel_case_fields() {
        let (_dir, store) = settings_store();
        store.save(&ThemeSettings::default()).expect("save");
        let raw = store.store.get(THEME_SETTINGS_SLOT).expect("raw blob");
        assert!(raw.contains("\"colorScheme\":\"blue\""));
        assert!(raw.contains("\"reducedMotion\":false"));
        assert!(raw.contains("\"mode\":\"system\""));
    }

    #[test]
    fn test_single_field_setter_preserves_others() {
        let (_dir, store) = settings_store();
        store
            .save(&ThemeSettings {
                mode: ThemeMode::Dark,
                color_scheme: ColorScheme::Green,
                reduced_motion: true,
            })
            .expect("save");

        store.set_mode(ThemeMode::Light).expect("set_mode");

        let settings = store.load();
        assert_eq!(settings.mode, ThemeMode::Light);
        assert_eq!(settings.color_scheme, ColorScheme::Green);
        assert!(settings.reduced_motion);
    }

    #[test]
    fn test_set_color_scheme_preserves_mode() {
        let (_dir, store) = settings_store();
        store.set_mode(ThemeMode::Dark).expect("set_mode");
        store
            .set_color_scheme(ColorScheme::Purple)
            .expect("set_color_scheme");
        let settings = store.load();
        assert_eq!(settings.mode, ThemeMode::Dark);
        assert_eq!(settings.color_scheme, ColorScheme::Purple);
    }

    #[test]
    fn test_unit_has_independent_lifecycle() {
        let (_dir, store) = settings_store();
        assert_eq!(store.load_unit(), UnitPreference::Metric);

        store.save_unit(UnitPreference::Imperial).expect("save_unit");
        assert_eq!(store.load_unit(), UnitPreference::Imperial);

        // Settings blob untouched by unit writes
        assert_eq!(store.load(), ThemeSettings::default());
    }

    #[test]
    fn test_unit_parse_unrecognized_falls_back_to_metric() {
        assert_eq!(UnitPreference::parse("kelvin"), UnitPreference::Metric);
        assert_eq!(UnitPreference::parse("imperial"), UnitPreference::Imperial);
    }

    #[test]
    fn test_unit_toggle() {
        assert_eq!(
            UnitPreference::Metric.toggled(),
            UnitPreference::Imperial
        );
        assert_eq!(
            UnitPreference::Imperial.toggled(),
            UnitPreference::Metric
        );
    }
}
