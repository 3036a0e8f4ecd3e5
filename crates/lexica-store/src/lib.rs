pub mod history;
pub mod prefs;
pub mod record;
pub mod storage;

pub use history::{HISTORY_KEY, HistoryStore, MAX_HISTORY};
pub use prefs::{PreferenceStore, SETTINGS_KEY};
pub use storage::{FileStorage, MemoryStorage, Storage};
