//! Item values and the categories that select their update rule

use serde::{Deserialize, Serialize};

use crate::catalog;

/// Lowest quality a non-legendary item can reach
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can reach
pub const MAX_QUALITY: i32 = 50;

/// Fixed quality of legendary items
pub const LEGENDARY_QUALITY: i32 = 80;

// ============================================================================
// Item
// ============================================================================

/// A single stock item.
///
/// The shape of this type is shared with callers outside the crate, so the
/// category is carried in `name` rather than in a dedicated field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Category inferred from the item name
    pub fn category(&self) -> Category {
        Category::from_name(&self.name)
    }

    /// Same name, new counters
    pub(crate) fn with_values(&self, sell_in: i32, quality: i32) -> Self {
        Self {
            name: self.name.clone(),
            sell_in,
            quality,
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

// ============================================================================
// Category
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Normal,
    Legendary,
    Aged,
    EventTicket,
    Conjured,
}

impl Category {
    /// Resolve a category by exact, case-sensitive name match.
    /// Unknown names are normal items.
    pub fn from_name(name: &str) -> Self {
        match name {
            catalog::AGED_BRIE => Category::Aged,
            catalog::BACKSTAGE_PASSES => Category::EventTicket,
            catalog::SULFURAS => Category::Legendary,
            catalog::CONJURED_MANA_CAKE => Category::Conjured,
            _ => Category::Normal,
        }
    }
}

/// Clamp a quality into the regular `[MIN_QUALITY, MAX_QUALITY]` range
pub fn clamp_quality(quality: i32) -> i32 {
    quality.clamp(MIN_QUALITY, MAX_QUALITY)
}
