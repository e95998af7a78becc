//! In-memory ordered collection of stocked items.
//!
//! Duplicate pairs are meaningful: each copy is one unit of stock.

use crate::date;
use crate::error::InventoryError;
use chrono::NaiveDateTime;
use inventory_types::Item;
use std::collections::HashSet;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Wraps `items` as-is. A loaded snapshot keeps the order it was saved in.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Appends `count` identical pairs. Zero or negative counts add nothing.
    pub fn add(&mut self, name: &str, expired_date: &str, count: i64) {
        for _ in 0..count.max(0) {
            self.items.push(Item::new(name, expired_date));
        }
    }

    pub fn list_all(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Unique names, in the order they first appear in the store.
    pub fn distinct_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .filter(|item| seen.insert(item.name.as_str()))
            .map(|item| item.name.clone())
            .collect()
    }

    pub fn find_exact(&self, name: &str, expired_date: &str) -> bool {
        self.items.iter().any(|item| item.matches(name, expired_date))
    }

    /// Removes the first occurrence of the pair only.
    pub fn remove_first(&mut self, name: &str, expired_date: &str) -> Result<Item, InventoryError> {
        let pos = self
            .items
            .iter()
            .position(|item| item.matches(name, expired_date))
            .ok_or_else(|| InventoryError::NotFound {
                name: name.to_string(),
                expired_date: expired_date.to_string(),
            })?;
        Ok(self.items.remove(pos))
    }

    pub fn edit(
        &mut self,
        old_name: &str,
        old_expired_date: &str,
        new_name: &str,
        new_expired_date: &str,
    ) -> Result<(), InventoryError> {
        self.remove_first(old_name, old_expired_date)?;
        self.add(new_name, new_expired_date, 1);
        Ok(())
    }

    /// Stable sort by (parsed expiry date, name). Unparseable dates sort first.
    pub fn sort(&mut self) {
        self.items
            .sort_by_cached_key(|item| (date::parse(&item.expired_date).ok(), item.name.clone()));
    }

    /// Items expiring within the window from `now`, past ones included, in store order.
    pub fn expiring_within(&self, now: NaiveDateTime) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| {
                date::parse(&item.expired_date)
                    .map(|d| date::is_expiring_soon(d, now))
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }
}
