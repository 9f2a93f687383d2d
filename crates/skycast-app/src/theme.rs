//! Theme resolution.
//!
//! The effective dark flag is a pure function of two observed signals: the
//! stored mode and the OS color-scheme preference. It is recomputed on every
//! read, never cached. Presentation tokens come from fixed lookup tables.

use tokio::sync::watch;

use skycast_core::{ColorScheme, SettingsStore, ThemeMode, ThemeSettings};
use skycast_weather::ConditionKind;

/// Derive the effective dark flag from the stored mode and the OS preference.
pub fn resolve_is_dark(mode: ThemeMode, os_dark: bool) -> bool {
    match mode {
        ThemeMode::Dark => true,
        ThemeMode::Light => false,
        ThemeMode::System => os_dark,
    }
}

/// Three-stop background gradient token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: &'static str,
    pub via: &'static str,
    pub to: &'static str,
}

/// Fixed gradient table: 4 color schemes x 2 modes.
pub fn gradient(scheme: ColorScheme, is_dark: bool) -> Gradient {
    match (scheme, is_dark) {
        (ColorScheme::Blue, false) => Gradient {
            from: "#60a5fa",
            via: "#22d3ee",
            to: "#0ea5e9",
        },
        (ColorScheme::Blue, true) => Gradient {
            from: "#172554",
            via: "#0f172a",
            to: "#020617",
        },
        (ColorScheme::Purple, false) => Gradient {
            from: "#c084fc",
            via: "#e879f9",
            to: "#ec4899",
        },
        (ColorScheme::Purple, true) => Gradient {
            from: "#3b0764",
            via: "#0f172a",
            to: "#020617",
        },
        (ColorScheme::Green, false) => Gradient {
            from: "#34d399",
            via: "#2dd4bf",
            to: "#06b6d4",
        },
        (ColorScheme::Green, true) => Gradient {
            from: "#022c22",
            via: "#0f172a",
            to: "#020617",
        },
        (ColorScheme::Orange, false) => Gradient {
            from: "#fb923c",
            via: "#fbbf24",
            to: "#eab308",
        },
        (ColorScheme::Orange, true) => Gradient {
            from: "#431407",
            via: "#0f172a",
            to: "#020617",
        },
    }
}

/// Overlay token shown while no weather condition has been resolved.
pub const BACKDROP_FALLBACK: &str = "#00000000";

/// Condition-tinted overlay token; falls back to [`BACKDROP_FALLBACK`] for
/// uncategorized conditions or before any fetch.
pub fn backdrop(kind: Option<ConditionKind>, is_dark: bool) -> &'static str {
    match (kind, is_dark) {
        (Some(ConditionKind::Clear), false) => "#eab30833",
        (Some(ConditionKind::Clear), true) => "#312e8133",
        (Some(ConditionKind::Clouds), false) => "#9ca3af33",
        (Some(ConditionKind::Clouds), true) => "#37415133",
        (Some(ConditionKind::Rain), false) => "#3b82f633",
        (Some(ConditionKind::Rain), true) => "#1e3a8a33",
        (Some(ConditionKind::Snow), false) => "#bfdbfe33",
        (Some(ConditionKind::Snow), true) => "#33415533",
        (Some(ConditionKind::Other), _) | (None, _) => BACKDROP_FALLBACK,
    }
}

/// Publisher for the OS color-scheme preference.
///
/// Platform glue (or a test) owns one of these and pushes changes into it;
/// consumers subscribe. Dropping a receiver deregisters the subscription.
#[derive(Debug)]
pub struct SystemScheme {
    tx: watch::Sender<bool>,
}

impl SystemScheme {
    pub fn new(dark: bool) -> Self {
        let (tx, _rx) = watch::channel(dark);
        Self { tx }
    }

    /// Publish a preference change to all subscribers.
    pub fn set_dark(&self, dark: bool) {
        self.tx.send_replace(dark);
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Resolves the presentation state from stored settings plus the OS signal.
#[derive(Debug)]
pub struct ThemeEngine {
    settings: SettingsStore,
    os_dark: watch::Receiver<bool>,
}

impl ThemeEngine {
    pub fn new(settings: SettingsStore, os_dark: watch::Receiver<bool>) -> Self {
        Self { settings, os_dark }
    }

    pub fn settings(&self) -> ThemeSettings {
        self.settings.load()
    }

    pub fn is_dark(&self) -> bool {
        resolve_is_dark(self.settings.load().mode, *self.os_dark.borrow())
    }

    pub fn gradient(&self) -> Gradient {
        gradient(self.settings.load().color_scheme, self.is_dark())
    }

    pub fn backdrop(&self, kind: Option<ConditionKind>) -> &'static str {
        backdrop(kind, self.is_dark())
    }

    /// Wait for the next OS preference change and return the re-derived dark
    /// flag. Returns `None` once the publisher has gone away.
    pub async fn os_preference_changed(&mut self) -> Option<bool> {
        self.os_dark.changed().await.ok()?;
        Some(self.is_dark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_core::LocalStore;

    fn engine(mode: ThemeMode, os_dark: bool) -> (tempfile::TempDir, SystemScheme, ThemeEngine) {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = SettingsStore::new(LocalStore::new(dir.path().join("store")));
        settings.set_mode(mode).expect("set_mode");
        let scheme = SystemScheme::new(os_dark);
        let subscription = scheme.subscribe();
        (dir, scheme, ThemeEngine::new(settings, subscription))
    }

    #[test]
    fn test_dark_mode_ignores_os_preference() {
        let (_dir, _scheme, eng) = engine(ThemeMode::Dark, false);
        assert!(eng.is_dark());
    }

    #[test]
    fn test_light_mode_ignores_os_preference() {
        let (_dir, _scheme, eng) = engine(ThemeMode::Light, true);
        assert!(!eng.is_dark());
    }

    #[test]
    fn test_system_mode_follows_os_preference() {
        let (_dir, scheme, eng) = engine(ThemeMode::System, false);
        assert!(!eng.is_dark());
        scheme.set_dark(true);
        assert!(eng.is_dark());
    }

    #[test]
    fn test_is_dark_tracks_settings_change_without_reconstruction() {
        let (_dir, _scheme, eng) = engine(ThemeMode::Light, true);
        assert!(!eng.is_dark());
        eng.settings.set_mode(ThemeMode::Dark).expect("set_mode");
        assert!(eng.is_dark());
    }

    #[tokio::test]
    async fn test_os_preference_change_notification() {
        let (_dir, scheme, mut eng) = engine(ThemeMode::System, false);
        scheme.set_dark(true);
        assert_eq!(eng.os_preference_changed().await, Some(true));
    }

    #[tokio::test]
    async fn test_publisher_drop_ends_notifications() {
        let (_dir, scheme, mut eng) = engine(ThemeMode::System, false);
        drop(scheme);
        assert_eq!(eng.os_preference_changed().await, None);
    }

    #[test]
    fn test_receiver_drop_deregisters() {
        let scheme = SystemScheme::new(false);
        let subscription = scheme.subscribe();
        assert_eq!(scheme.subscriber_count(), 1);
        drop(subscription);
        assert_eq!(scheme.subscriber_count(), 0);
    }

    #[test]
    fn test_gradient_table_lookup() {
        let light = gradient(ColorScheme::Blue, false);
        assert_eq!(light.from, "#60a5fa");

        let dark = gradient(ColorScheme::Blue, true);
        assert_eq!(dark.from, "#172554");

        assert_ne!(
            gradient(ColorScheme::Orange, false),
            gradient(ColorScheme::Green, false)
        );
    }

    #[test]
    fn test_backdrop_fallback() {
        assert_eq!(backdrop(None, false), BACKDROP_FALLBACK);
        assert_eq!(backdrop(Some(ConditionKind::Other), true), BACKDROP_FALLBACK);
        assert_ne!(backdrop(Some(ConditionKind::Rain), false), BACKDROP_FALLBACK);
    }

    #[test]
    fn test_backdrop_differs_by_mode() {
        assert_ne!(
            backdrop(Some(ConditionKind::Clear), false),
            backdrop(Some(ConditionKind::Clear), true)
        );
    }
}
