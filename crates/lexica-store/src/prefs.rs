use lexica_types::{Font, Preferences, Theme};

use crate::record;
use crate::storage::Storage;

pub const SETTINGS_KEY: &str = "dictionary-settings";

/// Owns the user's theme/font preferences. Loaded once at startup; every
/// mutation writes the full record back before returning.
pub struct PreferenceStore<S: Storage> {
    storage: S,
    prefs: Preferences,
}

impl<S: Storage> PreferenceStore<S> {
    /// Absent or corrupt storage silently falls back to `{light, inter}`.
    pub fn load(storage: S) -> Self {
        let prefs = record::load_or_default(&storage, SETTINGS_KEY);
        Self { storage, prefs }
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.prefs.theme = theme;
        self.persist();
    }

    pub fn set_font(&mut self, font: Font) {
        self.prefs.font = font;
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = record::persist(&self.storage, SETTINGS_KEY, &self.prefs) {
            tracing::warn!("failed to persist preferences: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn defaults_when_storage_is_empty() {
        let store = PreferenceStore::load(MemoryStorage::new());
        assert_eq!(store.preferences(), Preferences::default());
        assert_eq!(store.preferences().theme, Theme::Light);
        assert_eq!(store.preferences().font, Font::Inter);
    }

    #[test]
    fn defaults_when_storage_is_corrupt() {
        let storage = MemoryStorage::with_value(SETTINGS_KEY, "{{{ not json");
        let store = PreferenceStore::load(storage);
        assert_eq!(store.preferences(), Preferences::default());
    }

    #[test]
    fn theme_survives_a_reload() {
        let storage = MemoryStorage::new();
        let mut store = PreferenceStore::load(storage);
        store.set_theme(Theme::Dark);

        // Simulated process restart over the same backing storage
        let raw = store.storage.get(SETTINGS_KEY).unwrap();
        let reloaded = PreferenceStore::load(MemoryStorage::with_value(SETTINGS_KEY, &raw));
        assert_eq!(reloaded.preferences().theme, Theme::Dark);
        assert_eq!(reloaded.preferences().font, Font::Inter);
    }

    #[test]
    fn each_mutation_persists_the_full_record() {
        let mut store = PreferenceStore::load(MemoryStorage::new());
        store.set_font(Font::Merriweather);
        store.set_theme(Theme::Sepia);

        let raw = store.storage.get(SETTINGS_KEY).unwrap();
        assert!(raw.contains("sepia"));
        assert!(raw.contains("merriweather"));
    }
}
