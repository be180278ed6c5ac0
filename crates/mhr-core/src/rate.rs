//! Final machine hour rate: all category costs plus profit.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::{round_for_display, CategoryCosts, CostCategory};
use crate::lenient;
use crate::machine::MachineRecord;
use crate::projection::{project_total_cost, TotalCostBreakdown};
use crate::types::{checked_sum, scaled_product, Money, Percent, WorkingHoursContext};

/// Profit margin applied when none has been chosen.
pub const DEFAULT_PROFIT_PERCENTAGE: Percent = dec!(10);

/// Hourly cost per category, total, profit and the resulting rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    #[serde(flatten)]
    pub costs: CategoryCosts,
    pub total_cost_per_hour: Money,
    pub profit_percentage: Percent,
    pub profit_per_hour: Money,
    pub machine_hour_rate: Money,
}

impl CostBreakdown {
    /// Price a total cost at `profit_percentage`.
    ///
    /// rate = total x (1 + profit / 100)
    pub fn from_total(total: &TotalCostBreakdown, profit_percentage: Percent) -> Self {
        Self::priced(total.costs.clone(), total.total_cost_per_hour, profit_percentage)
    }

    /// Re-price at a different profit without re-running the category calculators.
    pub fn with_profit(&self, profit_percentage: Percent) -> Self {
        Self::priced(self.costs.clone(), self.total_cost_per_hour, profit_percentage)
    }

    /// `(category, hourly cost)` pairs in presentation order.
    pub fn categories(&self) -> Vec<(CostCategory, Money)> {
        self.costs.iter().collect()
    }

    /// Round every figure for display.
    pub fn rounded(&self, dp: u32) -> Self {
        Self {
            costs: self.costs.rounded(dp),
            total_cost_per_hour: round_for_display(self.total_cost_per_hour, dp),
            profit_percentage: self.profit_percentage,
            profit_per_hour: round_for_display(self.profit_per_hour, dp),
            machine_hour_rate: round_for_display(self.machine_hour_rate, dp),
        }
    }

    fn priced(costs: CategoryCosts, total_cost_per_hour: Money, profit_percentage: Percent) -> Self {
        let profit_per_hour =
            scaled_product(&[total_cost_per_hour, profit_percentage], dec!(100));
        Self {
            costs,
            total_cost_per_hour,
            profit_percentage,
            profit_per_hour,
            machine_hour_rate: checked_sum(&[total_cost_per_hour, profit_per_hour]),
        }
    }
}

/// A previously priced breakdown sent back for a new profit margin.
///
/// Every field may be missing. The total falls back to the sum of the
/// categories and the profit to [`DEFAULT_PROFIT_PERCENTAGE`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RepriceRequest {
    #[serde(flatten)]
    pub costs: CategoryCosts,
    #[serde(default, deserialize_with = "lenient::optional_decimal")]
    pub total_cost_per_hour: Option<Money>,
    #[serde(default, deserialize_with = "lenient::optional_decimal")]
    pub profit_percentage: Option<Percent>,
}

impl RepriceRequest {
    pub fn price(&self) -> CostBreakdown {
        let total = self
            .total_cost_per_hour
            .unwrap_or_else(|| self.costs.total());
        let profit = self.profit_percentage.unwrap_or(DEFAULT_PROFIT_PERCENTAGE);
        CostBreakdown::priced(self.costs.clone(), total, profit)
    }
}

/// Machine hour rate for a record, at the record's own working hours.
///
/// Sections that have not been entered price at zero, exactly as in the
/// running total.
pub fn calculate_final_machine_hour_rate(
    record: &MachineRecord,
    profit_percentage: Percent,
) -> CostBreakdown {
    calculate_machine_hour_rate_with(record, &record.working_hours(), profit_percentage)
}

/// Machine hour rate against an explicit working-hours context.
pub fn calculate_machine_hour_rate_with(
    record: &MachineRecord,
    ctx: &WorkingHoursContext,
    profit_percentage: Percent,
) -> CostBreakdown {
    let total = project_total_cost(record, ctx);
    let breakdown = CostBreakdown::from_total(&total, profit_percentage);
    debug!(
        total = %breakdown.total_cost_per_hour,
        profit = %profit_percentage,
        rate = %breakdown.machine_hour_rate,
        "machine hour rate priced"
    );
    breakdown
}

/// Profit stored on the record, or the default.
pub fn profit_for(record: &MachineRecord) -> Percent {
    record.profit_percentage.unwrap_or(DEFAULT_PROFIT_PERCENTAGE)
}
