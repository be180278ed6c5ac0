//! Machine investment: straight-line depreciation and interest on the
//! current book value, both spread over operating hours in a 365-day year.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::lenient;
use crate::types::{
    checked_sum, guarded_div, product, scaled_product, Hours, Money, Percent,
    WorkingHoursContext, DAYS_PER_YEAR,
};

const HUNDRED: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Investment step of the machine wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInput {
    /// Purchase cost of the machine
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub machine_cost: Money,
    /// Useful life of the machine in years
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub life_of_machine: Decimal,
    /// Operating hours per day; the time base for every hourly cost
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub working_hours_per_day: Hours,
    /// Remaining useful life in years (0 <= balance <= life)
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub balance_life_of_machine: Decimal,
    /// Annual interest rate, in percent
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub interest_rate: Percent,
    /// Scrap value as a percentage of machine cost
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub scrap_rate: Percent,
}

impl InvestmentInput {
    /// The working-hours context every other calculator reads.
    pub fn working_hours(&self) -> WorkingHoursContext {
        WorkingHoursContext::from_hours(self.working_hours_per_day)
    }

    fn is_costable(&self) -> bool {
        self.machine_cost > Decimal::ZERO
            && self.life_of_machine > Decimal::ZERO
            && self.working_hours_per_day > Decimal::ZERO
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Investment input augmented with the derived depreciation and interest figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentData {
    #[serde(flatten)]
    pub input: InvestmentInput,
    /// life x hours/day x 365
    pub machine_life_hours: Hours,
    /// Machine cost net of scrap value
    pub depreciable_base: Money,
    /// Straight-line depreciation per year
    pub annual_depreciation: Money,
    /// Depreciation already written off over the consumed life
    pub depreciation_elapsed: Money,
    /// Book value today
    pub current_value_of_machine: Money,
    pub depreciation_per_hour: Money,
    pub interest_per_hour: Money,
    /// Depreciation plus interest, per hour
    pub investment_cost_per_hour: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Derive depreciation, book value and interest for a machine.
///
/// Depreciable base: B = cost x (1 - scrap / 100)
/// Elapsed depreciation: B / life x (life - balance)
/// Depreciation per hour: B / (life x hours/day x 365)
/// Interest per hour: current value x rate / 100 / (hours/day x 365)
///
/// When cost, life or hours/day is zero every derived figure is zero.
/// A balance life outside `0..=life` is clamped into that range.
pub fn calculate_investment_data(input: &InvestmentInput) -> InvestmentData {
    if !input.is_costable() {
        trace!("investment inputs incomplete; derived figures zeroed");
        return InvestmentData::zeroed(input);
    }

    let ctx = input.working_hours();
    let life = input.life_of_machine;
    let balance = input.balance_life_of_machine.clamp(Decimal::ZERO, life);

    let machine_life_hours = product(&[life, input.working_hours_per_day, DAYS_PER_YEAR]);
    let scrap_value = scaled_product(&[input.machine_cost, input.scrap_rate], HUNDRED);
    let depreciable_base = checked_sum(&[input.machine_cost, -scrap_value]);
    let annual_depreciation = guarded_div(depreciable_base, life);
    let depreciation_elapsed = product(&[annual_depreciation, life - balance]);
    let current_value_of_machine = checked_sum(&[input.machine_cost, -depreciation_elapsed]);

    let depreciation_per_hour = guarded_div(depreciable_base, machine_life_hours);
    let annual_interest =
        scaled_product(&[current_value_of_machine, input.interest_rate], HUNDRED);
    let interest_per_hour = guarded_div(annual_interest, ctx.hours_per_year());

    trace!(
        %depreciation_per_hour,
        %interest_per_hour,
        "investment cost derived"
    );

    InvestmentData {
        input: input.clone(),
        machine_life_hours,
        depreciable_base,
        annual_depreciation,
        depreciation_elapsed,
        current_value_of_machine,
        depreciation_per_hour,
        interest_per_hour,
        investment_cost_per_hour: checked_sum(&[depreciation_per_hour, interest_per_hour]),
    }
}

impl InvestmentData {
    fn zeroed(input: &InvestmentInput) -> Self {
        Self {
            input: input.clone(),
            machine_life_hours: Decimal::ZERO,
            depreciable_base: Decimal::ZERO,
            annual_depreciation: Decimal::ZERO,
            depreciation_elapsed: Decimal::ZERO,
            current_value_of_machine: Decimal::ZERO,
            depreciation_per_hour: Decimal::ZERO,
            interest_per_hour: Decimal::ZERO,
            investment_cost_per_hour: Decimal::ZERO,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
