use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::trace;

use crate::error::StoreError;
use crate::store::{ArrayEntry, TableStore, TimestampedArray, entry_path};

#[derive(Clone, Debug, PartialEq)]
enum Value {
    Double(f64),
    DoubleArray(Vec<f64>),
}

impl Value {
    fn type_name(&self) -> &'static str {
        match self {
            Value::Double(_) => "double",
            Value::DoubleArray(_) => "double[]",
        }
    }
}

#[derive(Clone, Debug)]
struct Slot {
    value: Value,
    timestamp_micros: i64,
}

#[derive(Debug)]
struct Inner {
    slots: DashMap<String, Slot>,
    epoch: Instant,
    flushes: AtomicU64,
}

impl Inner {
    fn now_micros(&self) -> i64 {
        i64::try_from(self.epoch.elapsed().as_micros()).unwrap_or(i64::MAX)
    }

    // An entry keeps the type of its first publish.
    fn write(&self, path: String, value: Value, timestamp_micros: i64) -> Result<(), StoreError> {
        match self.slots.entry(path) {
            Entry::Occupied(mut slot) => {
                let found = slot.get().value.type_name();
                if found != value.type_name() {
                    return Err(StoreError::TypeMismatch {
                        key: slot.key().clone(),
                        expected: value.type_name(),
                        found,
                    });
                }
                slot.insert(Slot {
                    value,
                    timestamp_micros,
                });
            }
            Entry::Vacant(slot) => {
                trace!("Publishing new entry {}", slot.key());
                slot.insert(Slot {
                    value,
                    timestamp_micros,
                });
            }
        }
        Ok(())
    }

    fn read_array(&self, path: &str) -> Result<Option<TimestampedArray>, StoreError> {
        let Some(slot) = self.slots.get(path) else {
            return Ok(None);
        };
        match &slot.value {
            Value::DoubleArray(value) => Ok(Some(TimestampedArray {
                value: value.clone(),
                timestamp_micros: slot.timestamp_micros,
            })),
            other => Err(StoreError::TypeMismatch {
                key: path.to_string(),
                expected: "double[]",
                found: other.type_name(),
            }),
        }
    }
}

/// Process-local [`TableStore`] for tests and simulation.
///
/// Entries are stamped with microseconds since the store was created. Clones
/// share the same tables.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates an empty store whose clock starts now.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                slots: DashMap::new(),
                epoch: Instant::now(),
                flushes: AtomicU64::new(0),
            }),
        }
    }

    /// Microseconds since the store was created.
    pub fn now_micros(&self) -> i64 {
        self.inner.now_micros()
    }

    /// Publishes an array with an explicit arrival time.
    pub fn set_double_array_at(
        &self,
        table: &str,
        key: &str,
        value: &[f64],
        timestamp_micros: i64,
    ) -> Result<(), StoreError> {
        self.inner.write(
            entry_path(table, key),
            Value::DoubleArray(value.to_vec()),
            timestamp_micros,
        )
    }

    /// Returns true if `table`/`key` has been published.
    pub fn contains(&self, table: &str, key: &str) -> bool {
        self.inner.slots.contains_key(&entry_path(table, key))
    }

    /// Number of [`TableStore::flush`] calls so far.
    pub fn flush_count(&self) -> u64 {
        self.inner.flushes.load(Ordering::SeqCst)
    }
}

impl TableStore for MemoryStore {
    const STORE_NAME: &'static str = "Memory";

    type Entry = MemoryEntry;

    fn get_double(&self, table: &str, key: &str) -> Result<Option<f64>, StoreError> {
        let path = entry_path(table, key);
        let Some(slot) = self.inner.slots.get(&path) else {
            return Ok(None);
        };
        match &slot.value {
            Value::Double(v) => Ok(Some(*v)),
            other => Err(StoreError::TypeMismatch {
                key: path.clone(),
                expected: "double",
                found: other.type_name(),
            }),
        }
    }

    fn set_double(&self, table: &str, key: &str, value: f64) -> Result<(), StoreError> {
        self.inner
            .write(entry_path(table, key), Value::Double(value), self.now_micros())
    }

    fn get_double_array(&self, table: &str, key: &str) -> Result<Option<Vec<f64>>, StoreError> {
        Ok(self
            .inner
            .read_array(&entry_path(table, key))?
            .map(|array| array.value))
    }

    fn set_double_array(&self, table: &str, key: &str, value: &[f64]) -> Result<(), StoreError> {
        self.set_double_array_at(table, key, value, self.now_micros())
    }

    fn array_entry(&self, table: &str, key: &str) -> MemoryEntry {
        MemoryEntry {
            inner: Arc::clone(&self.inner),
            path: entry_path(table, key),
        }
    }

    fn flush(&self) -> Result<(), StoreError> {
        self.inner.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Handle to one array entry of a [`MemoryStore`].
#[derive(Clone, Debug)]
pub struct MemoryEntry {
    inner: Arc<Inner>,
    path: String,
}

impl ArrayEntry for MemoryEntry {
    fn get_atomic(&self) -> Result<TimestampedArray, StoreError> {
        Ok(self.inner.read_array(&self.path)?.unwrap_or_default())
    }

    fn set(&self, value: &[f64]) -> Result<(), StoreError> {
        self.inner.write(
            self.path.clone(),
            Value::DoubleArray(value.to_vec()),
            self.inner.now_micros(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpublished_reads_are_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.get_double("limelight", "tx").unwrap(), None);
        assert_eq!(store.get_double_array("limelight", "imu").unwrap(), None);
        let atomic = store.array_entry("limelight", "imu").get_atomic().unwrap();
        assert!(atomic.value.is_empty());
    }

    #[test]
    fn test_entry_handle_sees_store_writes() {
        let store = MemoryStore::new();
        let entry = store.array_entry("limelight", "botpose_wpiblue");
        store
            .set_double_array_at("limelight", "botpose_wpiblue", &[1.0, 2.0], 1_500)
            .unwrap();
        let atomic = entry.get_atomic().unwrap();
        assert_eq!(atomic.value, vec![1.0, 2.0]);
        assert_eq!(atomic.timestamp_micros, 1_500);

        entry.set(&[3.0]).unwrap();
        assert_eq!(
            store.get_double_array("limelight", "botpose_wpiblue").unwrap(),
            Some(vec![3.0])
        );
    }

    #[test]
    fn test_type_is_fixed_by_first_publish() {
        let store = MemoryStore::new();
        store.set_double("limelight", "tv", 1.0).unwrap();
        let err = store.set_double_array("limelight", "tv", &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            StoreError::TypeMismatch {
                expected: "double[]",
                found: "double",
                ..
            }
        ));
        assert!(store.get_double_array("limelight", "tv").is_err());
        assert_eq!(store.get_double("limelight", "tv").unwrap(), Some(1.0));
    }

    #[test]
    fn test_tables_are_separate() {
        let store = MemoryStore::new();
        store.set_double("limelight-front", "tx", 4.0).unwrap();
        assert!(store.contains("limelight-front", "tx"));
        assert!(!store.contains("limelight-back", "tx"));
        assert_eq!(store.get_double("limelight-back", "tx").unwrap(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        other.set_double("limelight", "ta", 0.3).unwrap();
        store.flush().unwrap();
        assert_eq!(store.get_double("limelight", "ta").unwrap(), Some(0.3));
        assert_eq!(other.flush_count(), 1);
    }
}
