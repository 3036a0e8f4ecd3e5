/// Errors for a single lookup attempt. Both are recoverable by the user;
/// the Display strings are the exact messages shown in the results view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Word not found. Please check the spelling and try again.")]
    NotFound,
    #[error("Failed to fetch word definition. Please try again.")]
    RequestFailed,
}
