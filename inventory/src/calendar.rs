//! Simulation calendar - one tick per day

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub tick: u64,
    pub date: NaiveDate,
}

impl Calendar {
    pub fn new(date: NaiveDate) -> Self {
        Self { tick: 0, date }
    }

    /// Opening day of the default calendar (2000-01-01)
    pub fn opening_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Move forward one day. The date stops at `NaiveDate::MAX`.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.date = self.date.succ_opt().unwrap_or(self.date);
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(Self::opening_date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_crosses_month() {
        let mut cal = Calendar::new(NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
        cal.advance();
        cal.advance();
        assert_eq!(cal.tick, 2);
        assert_eq!(cal.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_advance_saturates_date() {
        let mut cal = Calendar::new(NaiveDate::MAX);
        cal.advance();
        assert_eq!(cal.tick, 1);
        assert_eq!(cal.date, NaiveDate::MAX);
    }

    #[test]
    fn test_default_start() {
        let cal = Calendar::default();
        assert_eq!(cal.tick, 0);
        assert_eq!(cal.date.to_string(), "2000-01-01");
    }
}
