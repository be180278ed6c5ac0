//! Cutting tools and inserts, prorated over a 26-day working month.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::labor::ToolsWagesInput;
use crate::types::{guarded_div, Money, WorkingHoursContext};

/// Hourly tooling cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCostData {
    pub average_tool_cost_per_month: Money,
    pub tool_cost_per_hour: Money,
}

/// Average monthly tool spend divided by hours/day x working days per month.
pub fn calculate_tool_cost(input: &ToolsWagesInput, ctx: &WorkingHoursContext) -> ToolCostData {
    let tool_cost_per_hour = guarded_div(input.average_tool_cost_per_month, ctx.hours_per_month());
    trace!(%tool_cost_per_hour, "tool cost derived");
    ToolCostData {
        average_tool_cost_per_month: input.average_tool_cost_per_month,
        tool_cost_per_hour,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tool_cost_per_hour() {
        let input = ToolsWagesInput {
            average_tool_cost_per_month: dec!(5200),
            ..ToolsWagesInput::default()
        };
        let result = calculate_tool_cost(&input, &WorkingHoursContext::default());
        // 5,200 / 208
        assert_eq!(result.tool_cost_per_hour, dec!(25));
    }

    #[test]
    fn test_two_shift_tool_cost() {
        let input = ToolsWagesInput {
            average_tool_cost_per_month: dec!(5200),
            ..ToolsWagesInput::default()
        };
        let result = calculate_tool_cost(&input, &WorkingHoursContext::from_hours(dec!(16)));
        assert_eq!(result.tool_cost_per_hour, dec!(12.5));
    }

    #[test]
    fn test_no_hours_no_cost() {
        let input = ToolsWagesInput {
            average_tool_cost_per_month: dec!(5200),
            ..ToolsWagesInput::default()
        };
        let result = calculate_tool_cost(&input, &WorkingHoursContext::from_hours(Decimal::ZERO));
        assert_eq!(result.tool_cost_per_hour, Decimal::ZERO);
    }
}
