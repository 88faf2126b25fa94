//! Gilded Rose Inventory
//!
//! Daily sell-by and quality updates for the inn's stock. Each item is
//! advanced by a pure rule chosen from its name; an inventory is advanced by
//! applying that rule to every item.

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod inventory;
pub mod item;
pub mod report;
pub mod rules;

pub use calendar::Calendar;
pub use config::{ConfigError, SimulationConfig};
pub use inventory::{tick, Inventory, TickResult};
pub use item::{Category, Item};
pub use report::{InventoryReport, ReportedItem};
pub use rules::advance_one_day;
