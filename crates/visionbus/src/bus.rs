use crate::camera::Camera;
use crate::entries::EntryCache;
use crate::error::StoreError;
use crate::settings::BusSettings;
use crate::store::TableStore;

/// Owns a [`TableStore`] and the handle cache shared by every [`Camera`]
/// view onto it.
pub struct VisionBus<S: TableStore> {
    store: S,
    settings: BusSettings,
    entries: EntryCache<S::Entry>,
}

impl<S: TableStore> std::fmt::Debug for VisionBus<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VisionBus [{} store, {} cached entries]",
            S::STORE_NAME,
            self.entries.len()
        )
    }
}

impl<S: TableStore> VisionBus<S> {
    /// Wraps `store` with default settings.
    pub fn new(store: S) -> Self {
        Self::with_settings(store, BusSettings::default())
    }

    /// Wraps `store` with explicit settings.
    pub fn with_settings(store: S, settings: BusSettings) -> Self {
        Self {
            store,
            settings,
            entries: EntryCache::new(),
        }
    }

    /// Returns a view of the camera publishing under `name`. An empty name
    /// addresses [`BusSettings::default_table`].
    pub fn camera(&self, name: &str) -> Camera<'_, S> {
        Camera::new(self, self.settings.table_name(name).to_string())
    }

    /// The wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The active settings.
    pub fn settings(&self) -> &BusSettings {
        &self.settings
    }

    /// The array handle cache.
    pub fn entries(&self) -> &EntryCache<S::Entry> {
        &self.entries
    }

    /// Drops cached handles. Needed only when the store's entries have been
    /// recreated underneath the bus.
    pub fn clear_caches(&self) {
        self.entries.clear();
    }

    /// Pushes pending writes immediately.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.store.flush()
    }

    pub(crate) fn array_entry(&self, table: &str, key: &str) -> S::Entry {
        self.entries
            .get_or_insert_with(table, key, || self.store.array_entry(table, key))
    }
}
