use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::time::Instant;

use mhr_core::machine::MachineRecord;
use mhr_core::projection::project_total_cost;
use mhr_core::rate::calculate_machine_hour_rate_with;
use mhr_core::validation::check_record;
use mhr_core::WorkingHoursContext;

use super::envelope;
use crate::config::CliConfig;
use crate::input;

/// Arguments for the running total
#[derive(Args)]
pub struct TotalCostArgs {
    /// Path to JSON machine record (sections may be missing)
    #[arg(long)]
    pub input: Option<String>,

    /// Decimal places in the output (defaults to the configured precision)
    #[arg(long)]
    pub precision: Option<u32>,
}

/// Arguments for the final machine hour rate
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct RateArgs {
    /// Path to JSON machine record
    #[arg(long)]
    pub input: Option<String>,

    /// Profit margin in percent (overrides the record and the config)
    #[arg(long)]
    pub profit: Option<Decimal>,

    /// Decimal places in the output (defaults to the configured precision)
    #[arg(long)]
    pub precision: Option<u32>,
}

pub fn run_total_cost(
    args: TotalCostArgs,
    config: &CliConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let record: MachineRecord = input::require_input(args.input.as_deref(), "Machine record")?;
    let ctx = record_shift(&record, config);
    let precision = args.precision.unwrap_or(config.precision);

    let start = Instant::now();
    let result = project_total_cost(&record, &ctx);
    envelope(
        "Sum of hourly category costs; sections not yet entered count as zero",
        &json!({
            "hours_per_day": ctx.hours_per_day.to_string(),
            "working_days_per_month": ctx.working_days_per_month.to_string(),
            "precision": precision,
        }),
        check_record(&record),
        start,
        result.rounded(precision),
    )
}

pub fn run_rate(args: RateArgs, config: &CliConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let record: MachineRecord = input::require_input(args.input.as_deref(), "Machine record")?;
    let ctx = record_shift(&record, config);
    let precision = args.precision.unwrap_or(config.precision);
    let profit = args
        .profit
        .or(record.profit_percentage)
        .unwrap_or(config.profit_percentage);

    let start = Instant::now();
    let result = calculate_machine_hour_rate_with(&record, &ctx, profit);
    envelope(
        "Total hourly cost x (1 + profit / 100)",
        &json!({
            "profit_percentage": profit.to_string(),
            "hours_per_day": ctx.hours_per_day.to_string(),
            "working_days_per_month": ctx.working_days_per_month.to_string(),
            "precision": precision,
        }),
        check_record(&record),
        start,
        result.rounded(precision),
    )
}

/// The record's own shift on the configured working month.
fn record_shift(record: &MachineRecord, config: &CliConfig) -> WorkingHoursContext {
    WorkingHoursContext {
        working_days_per_month: config.working_days_per_month,
        ..record.working_hours()
    }
}
