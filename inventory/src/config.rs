//! Driver configuration, read from `GILDED_ROSE_*` environment variables

use chrono::NaiveDate;
use thiserror::Error;

use crate::calendar::Calendar;

pub const DAYS_VAR: &str = "GILDED_ROSE_DAYS";
pub const START_DATE_VAR: &str = "GILDED_ROSE_START_DATE";
pub const BENCHMARK_ITEMS_VAR: &str = "GILDED_ROSE_BENCHMARK_ITEMS";
pub const SEED_VAR: &str = "GILDED_ROSE_SEED";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("GILDED_ROSE_START_DATE must be a YYYY-MM-DD date, got {value:?}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Days to simulate over the standard inventory
    pub days: u32,
    pub start_date: NaiveDate,
    /// Size of the random benchmark inventory (0 disables the benchmark)
    pub benchmark_items: usize,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: 5,
            start_date: Calendar::opening_date(),
            benchmark_items: 0,
            seed: 12345,
        }
    }
}

impl SimulationConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(DAYS_VAR) {
            config.days = parse_number(DAYS_VAR, &value)?;
        }
        if let Some(value) = lookup(START_DATE_VAR) {
            config.start_date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                .map_err(|source| ConfigError::InvalidDate { value, source })?;
        }
        if let Some(value) = lookup(BENCHMARK_ITEMS_VAR) {
            config.benchmark_items = parse_number(BENCHMARK_ITEMS_VAR, &value)?;
        }
        if let Some(value) = lookup(SEED_VAR) {
            config.seed = parse_number(SEED_VAR, &value)?;
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: value.to_string(),
    })
}
