use std::time::Instant;

use mhr_core::machine::MachineRecord;
use mhr_core::rate::{profit_for, RepriceRequest};
use mhr_core::validation;
use mhr_core::{with_metadata, MhrError};
use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Serialize;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Every wizard call receives the machine record as entered so far.
fn read_record(input_json: &str) -> NapiResult<MachineRecord> {
    serde_json::from_str(input_json)
        .map_err(MhrError::from)
        .map_err(to_napi_error)
}

fn respond<T: Serialize>(
    methodology: &str,
    warnings: Vec<String>,
    start: Instant,
    result: T,
) -> NapiResult<String> {
    let elapsed = start.elapsed().as_micros() as u64;
    let output = with_metadata(methodology, &serde_json::Value::Null, warnings, elapsed, result);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Wizard sections
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_investment_data(input_json: String) -> NapiResult<String> {
    let record = read_record(&input_json)?;
    let investment = record.investment_data.unwrap_or_default();
    let start = Instant::now();
    let output = mhr_core::calculate_investment_data(&investment);
    respond(
        "Straight-line depreciation plus interest on book value",
        validation::check_investment(&investment),
        start,
        output,
    )
}

#[napi]
pub fn calculate_space_data(input_json: String) -> NapiResult<String> {
    let record = read_record(&input_json)?;
    let space = record.space_data.clone().unwrap_or_default();
    let start = Instant::now();
    let output = mhr_core::calculate_space_data(&space, &record.working_hours());
    respond(
        "Machine and shared floor area at rent per sq ft",
        validation::check_space(&space),
        start,
        output,
    )
}

#[napi]
pub fn calculate_power_data(input_json: String) -> NapiResult<String> {
    let record = read_record(&input_json)?;
    let power = record.power_data.unwrap_or_default();
    let start = Instant::now();
    let output = mhr_core::calculate_power_data(&power);
    respond(
        "Connected load x running time x utilization x unit rate",
        validation::check_power(&power),
        start,
        output,
    )
}

#[napi]
pub fn calculate_consumables_data(input_json: String) -> NapiResult<String> {
    let record = read_record(&input_json)?;
    let consumables = record.consumables_data.clone().unwrap_or_default();
    let start = Instant::now();
    let output = mhr_core::calculate_consumables_data(&consumables, &record.working_hours());
    respond(
        "Monthly consumables over working hours per month",
        validation::check_consumables(&consumables),
        start,
        output,
    )
}

#[napi]
pub fn calculate_tool_cost(input_json: String) -> NapiResult<String> {
    let record = read_record(&input_json)?;
    let tools_wages = record.tools_wages_data.clone().unwrap_or_default();
    let start = Instant::now();
    let output = mhr_core::calculate_tool_cost(&tools_wages, &record.working_hours());
    respond(
        "Monthly tool spend over working hours per month",
        Vec::new(),
        start,
        output,
    )
}

#[napi]
pub fn calculate_wages_salaries_data(input_json: String) -> NapiResult<String> {
    let record = read_record(&input_json)?;
    let tools_wages = record.tools_wages_data.clone().unwrap_or_default();
    let overheads = record.overheads_data.clone().unwrap_or_default();
    let mut warnings = validation::check_tools_wages(&tools_wages);
    warnings.extend(validation::check_overheads(&overheads));
    let start = Instant::now();
    let output = mhr_core::calculate_wages_salaries_data(
        &tools_wages,
        &overheads,
        &record.working_hours(),
    );
    respond(
        "Monthly salary over working hours per month and machines handled",
        warnings,
        start,
        output,
    )
}

// ---------------------------------------------------------------------------
// Totals and rate
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_total_cost_per_hour(input_json: String) -> NapiResult<String> {
    let record = read_record(&input_json)?;
    let start = Instant::now();
    let output = mhr_core::calculate_total_cost_per_hour(&record);
    respond(
        "Sum of hourly category costs so far",
        validation::check_record(&record),
        start,
        output,
    )
}

/// Uses the record's `profit_percentage`, or the default margin.
#[napi]
pub fn calculate_final_machine_hour_rate(input_json: String) -> NapiResult<String> {
    let record = read_record(&input_json)?;
    let start = Instant::now();
    let output = mhr_core::calculate_final_machine_hour_rate(&record, profit_for(&record));
    respond(
        "Total hourly cost x (1 + profit / 100)",
        validation::check_record(&record),
        start,
        output,
    )
}

/// Re-price an existing breakdown when the user changes the margin on the summary step.
///
/// A missing total is the sum of the categories; a missing margin is the default.
#[napi]
pub fn apply_profit(input_json: String) -> NapiResult<String> {
    let request: RepriceRequest = serde_json::from_str(&input_json)
        .map_err(MhrError::from)
        .map_err(to_napi_error)?;
    let start = Instant::now();
    respond(
        "Total hourly cost x (1 + profit / 100)",
        Vec::new(),
        start,
        request.price(),
    )
}
