//! YAML defaults for the CLI.
//!
//! Every field is optional in the file; command-line flags override what
//! is loaded here.

use std::fmt;
use std::fs;
use std::path::Path;

use mhr_core::{
    Hours, Percent, WorkingHoursContext, DEFAULT_PROFIT_PERCENTAGE, DEFAULT_WORKING_HOURS_PER_DAY,
    WORKING_DAYS_PER_MONTH,
};
use rust_decimal::Decimal;
use serde::Deserialize;

const MAX_HOURS_PER_DAY: u32 = 24;
const MAX_WORKING_DAYS_PER_MONTH: u32 = 31;
const MAX_PRECISION: u32 = 10;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Profit margin used by `rate` when `--profit` is not given.
    pub profit_percentage: Percent,
    /// Working days in a month for consumables, tools and labour.
    pub working_days_per_month: Decimal,
    /// Shift length for section commands run without investment data.
    pub default_working_hours_per_day: Hours,
    /// Decimal places shown by `total-cost` and `rate`.
    pub precision: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            profit_percentage: DEFAULT_PROFIT_PERCENTAGE,
            working_days_per_month: WORKING_DAYS_PER_MONTH,
            default_working_hours_per_day: DEFAULT_WORKING_HOURS_PER_DAY,
            precision: 2,
        }
    }
}

/// A single invalid setting.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    /// Key in the YAML file
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl CliConfig {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        // An empty file parses as YAML null; treat it as all defaults.
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(s).map_err(|e| ConfigError {
            field: "yaml".to_string(),
            message: e.to_string(),
        })
    }

    /// Every invalid setting, or an empty vector.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let hours = self.default_working_hours_per_day;
        if hours <= Decimal::ZERO || hours > Decimal::from(MAX_HOURS_PER_DAY) {
            errors.push(ConfigError {
                field: "default_working_hours_per_day".into(),
                message: format!("must be in (0, {MAX_HOURS_PER_DAY}], got {hours}"),
            });
        }
        let days = self.working_days_per_month;
        if days <= Decimal::ZERO || days > Decimal::from(MAX_WORKING_DAYS_PER_MONTH) {
            errors.push(ConfigError {
                field: "working_days_per_month".into(),
                message: format!("must be in (0, {MAX_WORKING_DAYS_PER_MONTH}], got {days}"),
            });
        }
        if self.profit_percentage <= Decimal::from(-100) {
            errors.push(ConfigError {
                field: "profit_percentage".into(),
                message: format!("must be above -100, got {}", self.profit_percentage),
            });
        }
        if self.precision > MAX_PRECISION {
            errors.push(ConfigError {
                field: "precision".into(),
                message: format!("must be at most {MAX_PRECISION}, got {}", self.precision),
            });
        }
        errors
    }

    /// Time base for a shift of `hours_per_day`, or the configured default shift.
    pub fn working_hours(&self, hours_per_day: Option<Hours>) -> WorkingHoursContext {
        WorkingHoursContext {
            hours_per_day: hours_per_day.unwrap_or(self.default_working_hours_per_day),
            working_days_per_month: self.working_days_per_month,
        }
    }
}
