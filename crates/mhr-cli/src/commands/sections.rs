use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::time::Instant;

use mhr_core::consumables::{calculate_consumables_data, ConsumablesInput};
use mhr_core::power::{calculate_power_data, PowerInput};
use mhr_core::space::{calculate_space_data, SpaceInput};
use mhr_core::validation::{check_consumables, check_power, check_space};

use super::envelope;
use crate::config::CliConfig;
use crate::input;

/// Arguments for the space cost calculation
#[derive(Args)]
pub struct SpaceArgs {
    /// Path to JSON file with the space section
    #[arg(long)]
    pub input: Option<String>,

    /// Operating hours per day (defaults to the configured shift)
    #[arg(long)]
    pub hours_per_day: Option<Decimal>,
}

/// Arguments for the power cost calculation
#[derive(Args)]
pub struct PowerArgs {
    /// Path to JSON file with the power section
    #[arg(long)]
    pub input: Option<String>,

    /// Bill at the derived genset tariff instead of the grid tariff
    #[arg(long)]
    pub use_genset_tariff: bool,
}

/// Arguments for the consumables cost calculation
#[derive(Args)]
pub struct ConsumablesArgs {
    /// Path to JSON file with the consumables section
    #[arg(long)]
    pub input: Option<String>,

    /// Operating hours per day (defaults to the configured shift)
    #[arg(long)]
    pub hours_per_day: Option<Decimal>,
}

pub fn run_space(args: SpaceArgs, config: &CliConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let space: SpaceInput = input::require_input(args.input.as_deref(), "Space")?;
    let ctx = config.working_hours(args.hours_per_day);

    let start = Instant::now();
    let result = calculate_space_data(&space, &ctx);
    envelope(
        "Machine floor area plus an equal share of common area, at rent per sq ft, over annual hours",
        &json!({
            "hours_per_year": ctx.hours_per_year().to_string(),
        }),
        check_space(&space),
        start,
        result,
    )
}

pub fn run_power(args: PowerArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut power: PowerInput = input::require_input(args.input.as_deref(), "Power")?;
    let mut warnings = check_power(&power);

    if args.use_genset_tariff {
        match power.with_genset_tariff() {
            Some(genset) => power = genset,
            None => warnings.push(
                "Genset tariff requested but cannot be derived; grid tariff used".to_string(),
            ),
        }
    }

    let start = Instant::now();
    let result = calculate_power_data(&power);
    envelope(
        "Connected load (kW) x running time x utilization x unit rate",
        &json!({
            "tariff": if args.use_genset_tariff { "genset" } else { "grid" },
            "electricity_unit_rate": power.electricity_unit_rate.to_string(),
        }),
        warnings,
        start,
        result,
    )
}

pub fn run_consumables(
    args: ConsumablesArgs,
    config: &CliConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let consumables: ConsumablesInput =
        input::require_input(args.input.as_deref(), "Consumables")?;
    let ctx = config.working_hours(args.hours_per_day);

    let start = Instant::now();
    let result = calculate_consumables_data(&consumables, &ctx);
    envelope(
        "Monthly coolant, waste, maintenance and other consumables over working hours per month",
        &json!({
            "working_days_per_month": ctx.working_days_per_month.to_string(),
            "hours_per_month": ctx.hours_per_month().to_string(),
        }),
        check_consumables(&consumables),
        start,
        result,
    )
}
