use dashmap::DashMap;
use tracing::trace;

use crate::store::entry_path;

/// Lazily built map from `<table>/<key>` to a resolved entry handle.
///
/// Safe to share between threads. Lookups for distinct keys do not order
/// against each other.
pub struct EntryCache<E> {
    entries: DashMap<String, E>,
}

impl<E> Default for EntryCache<E> {
    fn default() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl<E> std::fmt::Debug for EntryCache<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EntryCache [{} entries]", self.entries.len())
    }
}

impl<E: Clone> EntryCache<E> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached handle for `table`/`key`, resolving it with `make`
    /// on first use.
    pub fn get_or_insert_with(&self, table: &str, key: &str, make: impl FnOnce() -> E) -> E {
        let path = entry_path(table, key);
        if let Some(entry) = self.entries.get(&path) {
            return entry.value().clone();
        }
        self.entries
            .entry(path)
            .or_insert_with(|| {
                trace!("Caching entry handle for {}/{}", table, key);
                make()
            })
            .value()
            .clone()
    }

    /// Returns true if a handle for `table`/`key` has been resolved.
    #[inline(always)]
    pub fn contains(&self, table: &str, key: &str) -> bool {
        self.entries.contains_key(&entry_path(table, key))
    }

    /// Returns the number of cached handles
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached handle.
    pub fn clear(&self) {
        self.entries.clear();
    }
}
