use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::time::Instant;

use mhr_core::labor::calculate_wages_salaries_data;
use mhr_core::machine::MachineRecord;
use mhr_core::tools::calculate_tool_cost;
use mhr_core::validation::{check_overheads, check_tools_wages};
use mhr_core::WorkingHoursContext;

use super::envelope;
use crate::config::CliConfig;
use crate::input;

/// Arguments for the tool cost calculation
#[derive(Args)]
pub struct ToolsArgs {
    /// Path to JSON machine record with `tools_wages_data`
    #[arg(long)]
    pub input: Option<String>,

    /// Operating hours per day (overrides the record's investment section)
    #[arg(long)]
    pub hours_per_day: Option<Decimal>,
}

/// Arguments for the wages and salaries calculation
#[derive(Args)]
pub struct WagesArgs {
    /// Path to JSON machine record with `tools_wages_data` and `overheads_data`
    #[arg(long)]
    pub input: Option<String>,

    /// Operating hours per day (overrides the record's investment section)
    #[arg(long)]
    pub hours_per_day: Option<Decimal>,
}

pub fn run_tools(args: ToolsArgs, config: &CliConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let record: MachineRecord = input::require_input(args.input.as_deref(), "Machine record")?;
    let ctx = shift_for(&record, args.hours_per_day, config);
    let tools_wages = record.tools_wages_data.unwrap_or_default();

    let start = Instant::now();
    let result = calculate_tool_cost(&tools_wages, &ctx);
    envelope(
        "Average monthly tool spend over working hours per month",
        &json!({
            "hours_per_month": ctx.hours_per_month().to_string(),
        }),
        Vec::new(),
        start,
        result,
    )
}

pub fn run_wages(args: WagesArgs, config: &CliConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let record: MachineRecord = input::require_input(args.input.as_deref(), "Machine record")?;
    let ctx = shift_for(&record, args.hours_per_day, config);
    let tools_wages = record.tools_wages_data.unwrap_or_default();
    let overheads = record.overheads_data.unwrap_or_default();

    let mut warnings = check_tools_wages(&tools_wages);
    warnings.extend(check_overheads(&overheads));

    let start = Instant::now();
    let result = calculate_wages_salaries_data(&tools_wages, &overheads, &ctx);
    envelope(
        "Monthly salary / (working hours per month x machines handled), per role",
        &json!({
            "hours_per_month": ctx.hours_per_month().to_string(),
            "manager_in_hourly_rate": false,
        }),
        warnings,
        start,
        result,
    )
}

/// Shift from the flag, else the record's investment section, else the config default.
fn shift_for(
    record: &MachineRecord,
    hours_per_day: Option<Decimal>,
    config: &CliConfig,
) -> WorkingHoursContext {
    let from_record = record
        .investment_data
        .as_ref()
        .map(|inv| inv.working_hours_per_day);
    config.working_hours(hours_per_day.or(from_record))
}
