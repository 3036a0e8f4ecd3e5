pub mod entry;
pub mod event;
pub mod prefs;

pub use entry::{Definition, DictionaryEntry, License, Meaning, Phonetic};
pub use event::AppEvent;
pub use prefs::{Font, Preferences, Theme};

/// Identity key for history deduplication: trimmed and lower-cased
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}
