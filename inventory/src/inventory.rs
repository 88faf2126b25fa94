//! Inventory - ordered stock plus the calendar it is simulated on

use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::debug;

use crate::calendar::Calendar;
use crate::item::{Category, Item};
use crate::rules::advance_one_day;

/// Advance every item by one day, keeping order
pub fn tick(items: &[Item]) -> Vec<Item> {
    items.iter().map(advance_one_day).collect()
}

/// Summary of one simulated day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    pub day: u64,
    pub date: NaiveDate,
    /// Non-legendary items past their sell-by date
    pub expired: usize,
    /// Items with no quality left
    pub worthless: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
    calendar: Calendar,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_calendar(items, Calendar::default())
    }

    pub fn with_calendar(items: Vec<Item>, calendar: Calendar) -> Self {
        Self { items, calendar }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Run one simulation tick (advances 1 day)
    pub fn tick(&mut self) -> TickResult {
        self.items = tick(&self.items);
        self.finish_day()
    }

    /// Same as [`Inventory::tick`], mapping items on the rayon pool
    pub fn tick_parallel(&mut self) -> TickResult {
        self.items = self.items.par_iter().map(advance_one_day).collect();
        self.finish_day()
    }

    /// Run `days` ticks and return the last day's summary
    pub fn tick_many(&mut self, days: u32) -> Option<TickResult> {
        (0..days).map(|_| self.tick()).last()
    }

    fn finish_day(&mut self) -> TickResult {
        self.calendar.advance();

        let expired = self
            .items
            .iter()
            .filter(|item| item.category() != Category::Legendary && item.sell_in < 0)
            .count();
        let worthless = self.items.iter().filter(|item| item.quality == 0).count();

        let result = TickResult {
            day: self.calendar.tick,
            date: self.calendar.date,
            expired,
            worthless,
        };
        debug!(
            day = result.day,
            date = %result.date,
            expired,
            worthless,
            "inventory advanced"
        );
        result
    }
}
