//! The item store bound to its snapshot file.
//!
//! Every mutation goes through [`Inventory::apply`]: mutate, re-sort, then
//! rewrite the snapshot, rolling the store back if any step fails. Callers
//! hold the single `AppState` lock around the whole check-then-mutate
//! sequence.

use crate::error::InventoryError;
use crate::snapshot::Snapshot;
use crate::store::ItemStore;
use inventory_types::Item;

pub struct Inventory {
    store: ItemStore,
    snapshot: Snapshot,
}

impl Inventory {
    pub fn open(snapshot: Snapshot) -> Result<Self, InventoryError> {
        let store = ItemStore::from_items(snapshot.load()?);
        Ok(Self { store, snapshot })
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn add(&mut self, name: &str, expired_date: &str, count: i64) -> Result<(), InventoryError> {
        self.apply(|store| {
            store.add(name, expired_date, count);
            Ok(())
        })
    }

    pub fn edit(
        &mut self,
        old_name: &str,
        old_expired_date: &str,
        new_name: &str,
        new_expired_date: &str,
    ) -> Result<(), InventoryError> {
        self.apply(|store| store.edit(old_name, old_expired_date, new_name, new_expired_date))
    }

    pub fn remove(&mut self, name: &str, expired_date: &str) -> Result<Item, InventoryError> {
        self.apply(|store| store.remove_first(name, expired_date))
    }

    /// Runs `mutate`, re-sorts and persists. On any failure the store is
    /// restored to its state before the call.
    fn apply<T>(
        &mut self,
        mutate: impl FnOnce(&mut ItemStore) -> Result<T, InventoryError>,
    ) -> Result<T, InventoryError> {
        let prev = self.store.clone();
        let result = mutate(&mut self.store).and_then(|value| {
            self.store.sort();
            self.snapshot.save(self.store.list_all())?;
            Ok(value)
        });
        if let Err(e) = &result {
            if matches!(e, InventoryError::Io(_) | InventoryError::Json(_)) {
                log::error!(
                    "Failed to persist {} items to {}: {}",
                    self.store.len(),
                    self.snapshot.path().display(),
                    e
                );
            }
            self.store = prev;
        }
        result
    }
}
