//! Plausibility warnings for wizard input.
//!
//! None of these stop a calculation; they are shown next to the result.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::consumables::ConsumablesInput;
use crate::investment::InvestmentInput;
use crate::labor::{OverheadsInput, ToolsWagesInput};
use crate::machine::MachineRecord;
use crate::power::PowerInput;
use crate::space::SpaceInput;

const HOURS_PER_DAY: Decimal = dec!(24);
const HUNDRED_PERCENT: Decimal = dec!(100);

pub fn check_investment(input: &InvestmentInput) -> Vec<String> {
    let mut warnings = Vec::new();
    if input.machine_cost <= Decimal::ZERO {
        warnings.push("Machine cost is missing; investment cost is zero".to_string());
    }
    if input.life_of_machine <= Decimal::ZERO {
        warnings.push("Life of machine is missing; investment cost is zero".to_string());
    }
    if input.working_hours_per_day <= Decimal::ZERO {
        warnings.push(
            "Working hours per day is missing; every time-based cost is zero".to_string(),
        );
    } else if input.working_hours_per_day > HOURS_PER_DAY {
        warnings.push(format!(
            "Working hours per day ({}) exceeds 24",
            input.working_hours_per_day
        ));
    }
    if input.balance_life_of_machine > input.life_of_machine
        || input.balance_life_of_machine < Decimal::ZERO
    {
        warnings.push(format!(
            "Balance life ({}) must lie between 0 and the life of the machine ({}); clamped",
            input.balance_life_of_machine, input.life_of_machine
        ));
    }
    if input.scrap_rate < Decimal::ZERO || input.scrap_rate > HUNDRED_PERCENT {
        warnings.push(format!(
            "Scrap rate ({}%) should be between 0% and 100%",
            input.scrap_rate
        ));
    }
    if input.interest_rate < Decimal::ZERO {
        warnings.push(format!("Interest rate ({}%) is negative", input.interest_rate));
    }
    warnings
}

pub fn check_space(input: &SpaceInput) -> Vec<String> {
    let mut warnings = Vec::new();
    if input.factory_space_in_sq_ft <= Decimal::ZERO {
        warnings.push("Factory space is missing; space cost is zero".to_string());
        return warnings;
    }
    if input.space_occupied_by_machine > input.factory_space_in_sq_ft {
        warnings.push(format!(
            "Machine occupies {} sq ft, more than the factory's {} sq ft",
            input.space_occupied_by_machine, input.factory_space_in_sq_ft
        ));
    }
    if input.space_occupied_by_machine + input.common_space_in_sq_ft > input.factory_space_in_sq_ft
    {
        warnings.push("Machine and common space together exceed the factory space".to_string());
    }
    if input.common_space_in_sq_ft > Decimal::ZERO
        && input.number_of_machines_in_factory <= Decimal::ZERO
    {
        warnings.push(
            "Common space entered without a machine count; common share is zero".to_string(),
        );
    }
    warnings
}

pub fn check_power(input: &PowerInput) -> Vec<String> {
    let mut warnings = Vec::new();
    for (field, value) in [
        ("Utilization", input.utilization),
        ("Effective running time of motors", input.effective_running_time_of_motors),
        (
            "Effective running time of compressor",
            input.effective_running_time_of_compressor,
        ),
    ] {
        if value > HUNDRED_PERCENT {
            warnings.push(format!("{field} ({value}%) exceeds 100%"));
        }
    }
    if input.compressor_power > Decimal::ZERO
        && input.number_of_machines_connected_with_compressor <= Decimal::ZERO
    {
        warnings.push(
            "Compressor power entered without connected machines; compressor share is zero"
                .to_string(),
        );
    }
    if input.electricity_unit_rate <= Decimal::ZERO {
        warnings.push("Electricity unit rate is missing; power cost is zero".to_string());
    }
    if input.genset_power == Some(Decimal::ZERO) {
        warnings.push("Genset power is zero; genset unit rate not derived".to_string());
    }
    warnings
}

pub fn check_consumables(input: &ConsumablesInput) -> Vec<String> {
    let mut warnings = Vec::new();
    if input.coolant_oil_top_up_per_month > Decimal::ZERO
        && input.coolant_oil_cost_per_litre <= Decimal::ZERO
    {
        warnings.push("Coolant top-up entered without a cost per litre".to_string());
    }
    if input.waste_usage_per_month > Decimal::ZERO && input.cost_of_waste_per_kg <= Decimal::ZERO {
        warnings.push("Waste usage entered without a cost per kg".to_string());
    }
    warnings
}

pub fn check_tools_wages(input: &ToolsWagesInput) -> Vec<String> {
    let mut warnings = Vec::new();
    if input.operator_salary_per_month <= Decimal::ZERO {
        warnings.push("Operator salary is required".to_string());
    }
    warnings
}

pub fn check_overheads(input: &OverheadsInput) -> Vec<String> {
    let counters = [
        ("operator", input.machines_handled_by_operator),
        ("helper", input.machines_handled_by_helper),
        ("quality inspector", input.machines_handled_by_quality_inspector),
        (
            "production supervisor",
            input.machines_handled_by_production_supervisor,
        ),
        (
            "quality supervisor",
            input.machines_handled_by_quality_supervisor,
        ),
        ("engineer", input.machines_handled_by_engineer),
    ];
    let mut warnings: Vec<String> = counters
        .iter()
        .filter_map(|(role, count)| match count {
            Some(c) if *c < Decimal::ONE => Some(format!(
                "Machines handled by {role} ({c}) is below 1; treated as 1"
            )),
            _ => None,
        })
        .collect();
    if input.manager_salary > Decimal::ZERO {
        warnings.push(
            "Manager salary is listed in overhead totals but not charged to the hourly rate"
                .to_string(),
        );
    }
    warnings
}

/// Every warning for a record, section by section, then any pending steps.
pub fn check_record(record: &MachineRecord) -> Vec<String> {
    let mut warnings = Vec::new();
    if let Some(i) = &record.investment_data {
        warnings.extend(check_investment(i));
    }
    if let Some(s) = &record.space_data {
        warnings.extend(check_space(s));
    }
    if let Some(p) = &record.power_data {
        warnings.extend(check_power(p));
    }
    if let Some(c) = &record.consumables_data {
        warnings.extend(check_consumables(c));
    }
    if let Some(t) = &record.tools_wages_data {
        warnings.extend(check_tools_wages(t));
    }
    if let Some(o) = &record.overheads_data {
        warnings.extend(check_overheads(o));
    }
    let pending = record.pending_steps();
    if !pending.is_empty() {
        let labels: Vec<&str> = pending.iter().map(|s| s.label()).collect();
        warnings.push(format!("Steps not yet entered: {}", labels.join(", ")));
    }
    warnings
}
