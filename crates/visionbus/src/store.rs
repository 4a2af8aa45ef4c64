use crate::error::StoreError;

/// An array value together with the bus arrival time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimestampedArray {
    /// The published array. Empty when nothing has been published.
    pub value: Vec<f64>,
    /// Bus arrival time, microseconds.
    pub timestamp_micros: i64,
}

/// A resolved handle to one array entry.
///
/// Handles are cheap to clone and are cached by [`EntryCache`](crate::EntryCache)
/// so repeated reads skip the store's name lookup.
pub trait ArrayEntry: Clone + Send + Sync + 'static {
    /// Reads the value and its arrival time in one step.
    fn get_atomic(&self) -> Result<TimestampedArray, StoreError>;

    /// Publishes a new value.
    fn set(&self, value: &[f64]) -> Result<(), StoreError>;
}

/// A key-value telemetry bus organized as named tables of typed entries.
///
/// Reads of entries that were never published return `Ok(None)`; errors are
/// reserved for type mismatches and an unreachable store.
pub trait TableStore: Send + Sync + 'static {
    /// This is to be used for logging.
    const STORE_NAME: &'static str;

    /// Handle type returned by [`TableStore::array_entry`].
    type Entry: ArrayEntry;

    /// Reads a scalar entry.
    fn get_double(&self, table: &str, key: &str) -> Result<Option<f64>, StoreError>;

    /// Publishes a scalar entry.
    fn set_double(&self, table: &str, key: &str, value: f64) -> Result<(), StoreError>;

    /// Reads an array entry.
    fn get_double_array(&self, table: &str, key: &str) -> Result<Option<Vec<f64>>, StoreError>;

    /// Publishes an array entry.
    fn set_double_array(&self, table: &str, key: &str, value: &[f64]) -> Result<(), StoreError>;

    /// Resolves a handle to an array entry, creating the entry lazily.
    fn array_entry(&self, table: &str, key: &str) -> Self::Entry;

    /// Pushes pending writes to the network immediately.
    fn flush(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Cache and store key for `key` in `table`.
pub fn entry_path(table: &str, key: &str) -> String {
    format!("{table}/{key}")
}
