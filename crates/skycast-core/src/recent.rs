//! Recently searched cities, bounded and de-duplicated.

use crate::store::LocalStore;

/// Slot holding the recent-city list as a JSON string array.
pub const RECENT_CITIES_SLOT: &str = "recent_cities";

/// Seed list shown before the user has searched anything.
pub const DEFAULT_CITIES: [&str; 3] = ["London", "New York", "Tokyo"];

/// Maximum number of cities kept in the list.
pub const MAX_RECENT: usize = 5;

/// Tracker for the most-recently searched city names.
///
/// The list is most-recent-first, unique under case-insensitive comparison
/// and truncated to [`MAX_RECENT`] entries.
#[derive(Debug, Clone)]
pub struct RecentCities {
    store: LocalStore,
}

impl RecentCities {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// The persisted list, or `None` when nothing has ever been recorded.
    pub fn stored(&self) -> Option<Vec<String>> {
        self.store
            .get_json::<Vec<String>>(RECENT_CITIES_SLOT)
            .filter(|list| !list.is_empty())
    }

    /// The persisted list, seeded with [`DEFAULT_CITIES`] on first run.
    /// The seed is display-only and is not written back.
    pub fn load(&self) -> Vec<String> {
        self.stored()
            .unwrap_or_else(|| DEFAULT_CITIES.iter().map(|c| c.to_string()).collect())
    }

    /// Record a search, returning the updated list.
    ///
    /// Prepends `city`, drops any prior entry equal under case-insensitive
    /// comparison and truncates to [`MAX_RECENT`]. Callers pass the canonical
    /// name from the API response so typos and casing normalize post-fetch.
    pub fn record(&self, city: &str) -> Vec<String> {
        let lowered = city.to_lowercase();
        let mut updated = vec![city.to_string()];
        updated.extend(
            self.load()
                .into_iter()
                .filter(|c| c.to_lowercase() != lowered),
        );
        updated.truncate(MAX_RECENT);

        if let Err(e) = self.store.set_json(RECENT_CITIES_SLOT, &updated) {
            tracing::warn!("Failed to persist recent cities: {}", e);
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> (tempfile::TempDir, RecentCities) {
        let dir = tempfile::tempdir().expect("tempdir");
        let tracker = RecentCities::new(LocalStore::new(dir.path().join("store")));
        (dir, tracker)
    }

    #[test]
    fn test_first_run_is_seeded_without_persisting() {
        let (_dir, tracker) = tracker();
        assert_eq!(tracker.load(), vec!["London", "New York", "Tokyo"]);
        assert!(tracker.stored().is_none());
    }

    #[test]
    fn test_record_prepends_and_persists() {
        let (_dir, tracker) = tracker();
        let list = tracker.record("Paris");
        assert_eq!(list[0], "Paris");
        assert_eq!(tracker.stored().expect("persisted"), list);
    }

    #[test]
    fn test_record_dedupes_case_insensitively() {
        let (_dir, tracker) = tracker();
        tracker.record("Tokyo");
        let list = tracker.record("tokyo");

        let tokyo_count = list
            .iter()
            .filter(|c| c.eq_ignore_ascii_case("tokyo"))
            .count();
        assert_eq!(tokyo_count, 1);
        assert_eq!(list[0], "tokyo");
    }

    #[test]
    fn test_record_is_bounded_most_recent_first() {
        let (_dir, tracker) = tracker();
        for city in ["Oslo", "Paris", "Berlin", "Madrid", "Rome", "Lisbon"] {
            tracker.record(city);
        }
        let list = tracker.load();
        assert_eq!(list.len(), MAX_RECENT);
        assert_eq!(list, vec!["Lisbon", "Rome", "Madrid", "Berlin", "Paris"]);
    }

    #[test]
    fn test_record_against_seed_list_dedupes() {
        let (_dir, tracker) = tracker();
        let list = tracker.record("london");
        assert_eq!(list, vec!["london", "New York", "Tokyo"]);
    }
}
