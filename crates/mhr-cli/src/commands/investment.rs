use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::time::Instant;

use mhr_core::investment::{calculate_investment_data, InvestmentInput};
use mhr_core::validation::check_investment;
use mhr_core::MhrError;

use super::envelope;
use crate::input;

/// Arguments for the investment cost calculation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct InvestmentArgs {
    /// Purchase cost of the machine
    #[arg(long)]
    pub machine_cost: Option<Decimal>,

    /// Expected life in years
    #[arg(long)]
    pub life_of_machine: Option<Decimal>,

    /// Operating hours per day
    #[arg(long, alias = "hours")]
    pub working_hours_per_day: Option<Decimal>,

    /// Remaining life in years (defaults to zero)
    #[arg(long, alias = "balance-life")]
    pub balance_life_of_machine: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 12 for 12%)
    #[arg(long)]
    pub interest_rate: Option<Decimal>,

    /// Scrap value as a percent of machine cost
    #[arg(long)]
    pub scrap_rate: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_investment(args: InvestmentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let investment: InvestmentInput = match input::read_input(args.input.as_deref())? {
        Some(data) => data,
        None => InvestmentInput {
            machine_cost: required(args.machine_cost, "machine_cost")?,
            life_of_machine: required(args.life_of_machine, "life_of_machine")?,
            working_hours_per_day: required(
                args.working_hours_per_day,
                "working_hours_per_day",
            )?,
            balance_life_of_machine: args.balance_life_of_machine.unwrap_or_default(),
            interest_rate: args.interest_rate.unwrap_or_default(),
            scrap_rate: args.scrap_rate.unwrap_or_default(),
        },
    };

    let start = Instant::now();
    let result = calculate_investment_data(&investment);
    envelope(
        "Straight-line depreciation over life hours plus interest on current book value",
        &json!({
            "days_per_year": 365,
            "working_hours_per_day": investment.working_hours_per_day.to_string(),
        }),
        check_investment(&investment),
        start,
        result,
    )
}

fn required(value: Option<Decimal>, field: &str) -> Result<Decimal, MhrError> {
    value.ok_or_else(|| MhrError::InvalidInput {
        field: field.to_string(),
        reason: format!("--{} is required (or provide --input)", field.replace('_', "-")),
    })
}
