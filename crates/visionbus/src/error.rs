use thiserror::Error;

/// Errors surfaced by a [`TableStore`](crate::TableStore) or while loading
/// settings.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The entry exists but holds a different value type.
    #[error("entry '{key}' holds {found}, expected {expected}")]
    TypeMismatch {
        /// Full `<table>/<key>` path of the entry.
        key: String,
        /// Type the caller asked for.
        expected: &'static str,
        /// Type the entry currently holds.
        found: &'static str,
    },

    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A settings document failed to parse.
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}
