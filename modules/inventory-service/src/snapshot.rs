//! Flat-file snapshot of the item store.
//!
//! The file holds one JSON value, an array of `[name, "dd.mm.yy"]` pairs.
//! It is read once at startup and rewritten in full after every mutation.

use crate::date;
use crate::error::InventoryError;
use inventory_types::Item;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means an empty store. Any stored date that does not parse
    /// rejects the whole snapshot.
    pub fn load(&self) -> Result<Vec<Item>, InventoryError> {
        if !self.path.exists() {
            log::info!("No snapshot at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        let items: Vec<Item> = serde_json::from_str(&raw)?;
        if let Some(bad) = items.iter().find(|item| !date::is_valid(&item.expired_date)) {
            return Err(InventoryError::InvalidDate {
                field: "expired_date",
                value: bad.expired_date.clone(),
            });
        }

        log::info!("Loaded {} items from {}", items.len(), self.path.display());
        Ok(items)
    }

    /// Writes to a sibling temp file and renames it over the snapshot, so a
    /// crash mid-write leaves the previous snapshot intact.
    pub fn save(&self, items: &[Item]) -> Result<(), InventoryError> {
        let json = serde_json::to_string(items)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
