//! Inventory report
//!
//! Serializable snapshot of the stock on a given day, for printing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::inventory::Inventory;
use crate::item::{Category, Item};

/// Report schema version
pub const REPORT_VERSION: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryReport {
    pub version: u8,
    pub day: u64,
    pub date: NaiveDate,
    pub items: Vec<ReportedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedItem {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
    pub category: Category,
}

impl From<&Item> for ReportedItem {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            sell_in: item.sell_in,
            quality: item.quality,
            category: item.category(),
        }
    }
}

impl InventoryReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Inventory {
    pub fn report(&self) -> InventoryReport {
        InventoryReport {
            version: REPORT_VERSION,
            day: self.calendar().tick,
            date: self.calendar().date,
            items: self.items().iter().map(ReportedItem::from).collect(),
        }
    }
}
