//! Shared types for the inventory service and its HTTP clients.

use serde::{Deserialize, Serialize};

// =====================================================
// Domain Types
// =====================================================

/// A stocked item: a name plus its expiry date in `dd.mm.yy` form.
///
/// On the wire (and in the snapshot file) an item is a two-element array
/// `["milk", "01.01.30"]`. Equality compares the raw strings, so
/// `"1.1.30"` and `"01.01.30"` are different items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Item {
    pub name: String,
    pub expired_date: String,
}

impl Item {
    pub fn new(name: impl Into<String>, expired_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expired_date: expired_date.into(),
        }
    }

    pub fn matches(&self, name: &str, expired_date: &str) -> bool {
        self.name == name && self.expired_date == expired_date
    }
}

impl From<(String, String)> for Item {
    fn from((name, expired_date): (String, String)) -> Self {
        Self { name, expired_date }
    }
}

impl From<Item> for (String, String) {
    fn from(item: Item) -> Self {
        (item.name, item.expired_date)
    }
}

// =====================================================
// Response Types
// =====================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

// =====================================================
// Service Status
// =====================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub running: bool,
    pub uptime_secs: u64,
    pub total_items: usize,
    pub distinct_names: usize,
}
