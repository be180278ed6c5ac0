//! Consumables and maintenance, prorated over a 26-day working month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::lenient;
use crate::types::{
    checked_sum, guarded_div, product, Money, WorkingHoursContext, MONTHS_PER_YEAR,
};

/// Consumables step of the machine wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumablesInput {
    /// Litres of coolant oil topped up per month
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub coolant_oil_top_up_per_month: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub coolant_oil_cost_per_litre: Money,
    /// Kilograms of cotton waste used per month
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub waste_usage_per_month: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cost_of_waste_per_kg: Money,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub monthly_maintenance_cost: Money,
    /// Annual maintenance contract, spread over twelve months
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub annual_maintenance_cost: Money,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub other_consumables_per_month: Money,
}

/// Consumables input augmented with monthly and hourly cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumablesData {
    #[serde(flatten)]
    pub input: ConsumablesInput,
    pub monthly_coolant_cost: Money,
    pub monthly_waste_cost: Money,
    pub total_monthly_cost: Money,
    pub consumables_cost_per_hour: Money,
}

/// Monthly consumable spend divided by hours/day x working days per month.
pub fn calculate_consumables_data(
    input: &ConsumablesInput,
    ctx: &WorkingHoursContext,
) -> ConsumablesData {
    let monthly_coolant_cost = product(&[
        input.coolant_oil_top_up_per_month,
        input.coolant_oil_cost_per_litre,
    ]);
    let monthly_waste_cost = product(&[input.waste_usage_per_month, input.cost_of_waste_per_kg]);

    let total_monthly_cost = checked_sum(&[
        monthly_coolant_cost,
        monthly_waste_cost,
        input.monthly_maintenance_cost,
        input.other_consumables_per_month,
        guarded_div(input.annual_maintenance_cost, MONTHS_PER_YEAR),
    ]);

    let consumables_cost_per_hour = guarded_div(total_monthly_cost, ctx.hours_per_month());

    trace!(%total_monthly_cost, %consumables_cost_per_hour, "consumables cost derived");

    ConsumablesData {
        input: input.clone(),
        monthly_coolant_cost,
        monthly_waste_cost,
        total_monthly_cost,
        consumables_cost_per_hour,
    }
}
