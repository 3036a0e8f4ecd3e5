use crate::entry::DictionaryEntry;
use crate::prefs::{Font, Theme};

/// Events flowing between the io watcher, the app event loop and the ui task.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// User submitted a term for lookup
    SearchText(String),
    /// User asked for a random popular word
    RandomWord,
    /// A lookup request is in flight for this term
    Searching(String),
    ShowResults(Vec<DictionaryEntry>),
    ShowError(String),
    /// Informational line for the ui (confirmations, hints)
    Notice(String),
    SetTheme(Theme),
    SetFont(Font),
    RequestHistory,
    ShowHistory(Vec<String>),
    ClearHistory,
    Close,
}
