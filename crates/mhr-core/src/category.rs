//! The seven cost categories that make up a machine hour rate.
//!
//! Each category is a pure function of the machine record and the shared
//! working-hours context. A missing section prices at zero.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::consumables::calculate_consumables_data;
use crate::investment::calculate_investment_data;
use crate::labor::{calculate_wages_salaries_data, OverheadsInput, ToolsWagesInput};
use crate::lenient;
use crate::machine::{MachineRecord, WizardStep};
use crate::power::calculate_power_data;
use crate::space::calculate_space_data;
use crate::tools::calculate_tool_cost;
use crate::types::{checked_sum, Money, WorkingHoursContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Investment,
    Space,
    Power,
    Consumables,
    Tools,
    Wages,
    Salary,
}

impl CostCategory {
    pub const ALL: [CostCategory; 7] = [
        CostCategory::Investment,
        CostCategory::Space,
        CostCategory::Power,
        CostCategory::Consumables,
        CostCategory::Tools,
        CostCategory::Wages,
        CostCategory::Salary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CostCategory::Investment => "Investment",
            CostCategory::Space => "Space",
            CostCategory::Power => "Power",
            CostCategory::Consumables => "Consumables",
            CostCategory::Tools => "Tools",
            CostCategory::Wages => "Wages",
            CostCategory::Salary => "Salary",
        }
    }

    /// The wizard step whose section this category is priced from.
    pub fn source_step(self) -> WizardStep {
        match self {
            CostCategory::Investment => WizardStep::Investment,
            CostCategory::Space => WizardStep::Space,
            CostCategory::Power => WizardStep::Power,
            CostCategory::Consumables => WizardStep::Consumables,
            CostCategory::Tools | CostCategory::Wages => WizardStep::ToolsWages,
            CostCategory::Salary => WizardStep::Overheads,
        }
    }

    /// Hourly cost of this category for `record`.
    ///
    /// Wages read the machines-handled counters from the overheads section
    /// when present; salary needs only the overheads section.
    pub fn hourly_cost(self, record: &MachineRecord, ctx: &WorkingHoursContext) -> Money {
        let cost = match self {
            CostCategory::Investment => record
                .investment_data
                .as_ref()
                .map(|i| calculate_investment_data(i).investment_cost_per_hour),
            CostCategory::Space => record
                .space_data
                .as_ref()
                .map(|s| calculate_space_data(s, ctx).space_cost_per_hour),
            CostCategory::Power => record
                .power_data
                .as_ref()
                .map(|p| calculate_power_data(p).power_cost_per_hour),
            CostCategory::Consumables => record
                .consumables_data
                .as_ref()
                .map(|c| calculate_consumables_data(c, ctx).consumables_cost_per_hour),
            CostCategory::Tools => record
                .tools_wages_data
                .as_ref()
                .map(|t| calculate_tool_cost(t, ctx).tool_cost_per_hour),
            CostCategory::Wages => record.tools_wages_data.as_ref().map(|t| {
                let overheads = record.overheads_data.clone().unwrap_or_default();
                calculate_wages_salaries_data(t, &overheads, ctx).total_wages_per_hour
            }),
            CostCategory::Salary => record.overheads_data.as_ref().map(|o| {
                let wages = record.tools_wages_data.clone().unwrap_or_default();
                calculate_wages_salaries_data(&wages, o, ctx).total_salary_per_hour
            }),
        };
        cost.unwrap_or(Decimal::ZERO)
    }
}

/// One hourly figure per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryCosts {
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub investment_cost: Money,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub space_cost: Money,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub power_cost: Money,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub consumables_cost: Money,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub tool_cost: Money,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub wages: Money,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub salary: Money,
}

impl CategoryCosts {
    pub fn get(&self, category: CostCategory) -> Money {
        match category {
            CostCategory::Investment => self.investment_cost,
            CostCategory::Space => self.space_cost,
            CostCategory::Power => self.power_cost,
            CostCategory::Consumables => self.consumables_cost,
            CostCategory::Tools => self.tool_cost,
            CostCategory::Wages => self.wages,
            CostCategory::Salary => self.salary,
        }
    }

    fn slot(&mut self, category: CostCategory) -> &mut Money {
        match category {
            CostCategory::Investment => &mut self.investment_cost,
            CostCategory::Space => &mut self.space_cost,
            CostCategory::Power => &mut self.power_cost,
            CostCategory::Consumables => &mut self.consumables_cost,
            CostCategory::Tools => &mut self.tool_cost,
            CostCategory::Wages => &mut self.wages,
            CostCategory::Salary => &mut self.salary,
        }
    }

    pub fn set(&mut self, category: CostCategory, cost: Money) {
        *self.slot(category) = cost;
    }

    /// Sum of all categories, zero if it leaves the decimal range.
    pub fn total(&self) -> Money {
        checked_sum(&CostCategory::ALL.map(|c| self.get(c)))
    }

    /// `(category, cost)` pairs in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (CostCategory, Money)> + '_ {
        CostCategory::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    /// Round every figure half away from zero, for display.
    pub fn rounded(&self, dp: u32) -> Self {
        let mut out = self.clone();
        for category in CostCategory::ALL {
            out.set(category, round_for_display(self.get(category), dp));
        }
        out
    }
}

pub(crate) fn round_for_display(value: Money, dp: u32) -> Money {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::investment::InvestmentInput;
    use rust_decimal_macros::dec;

    #[test]
    fn test_missing_sections_price_at_zero() {
        let record = MachineRecord::default();
        let ctx = WorkingHoursContext::default();
        for category in CostCategory::ALL {
            assert_eq!(
                category.hourly_cost(&record, &ctx),
                Decimal::ZERO,
                "{} should be zero",
                category.label()
            );
        }
    }

    #[test]
    fn test_wages_without_overheads_use_single_machine_counters() {
        let record = MachineRecord {
            tools_wages_data: Some(ToolsWagesInput {
                operator_salary_per_month: dec!(20800),
                ..ToolsWagesInput::default()
            }),
            ..MachineRecord::default()
        };
        let cost = CostCategory::Wages.hourly_cost(&record, &WorkingHoursContext::default());
        assert_eq!(cost, dec!(100));
    }

    #[test]
    fn test_salary_needs_only_overheads() {
        let record = MachineRecord {
            overheads_data: Some(OverheadsInput {
                engineer_salary: dec!(20800),
                ..OverheadsInput::default()
            }),
            ..MachineRecord::default()
        };
        let cost = CostCategory::Salary.hourly_cost(&record, &WorkingHoursContext::default());
        assert_eq!(cost, dec!(100));
    }

    #[test]
    fn test_investment_ignores_context_hours() {
        let record = MachineRecord {
            investment_data: Some(InvestmentInput {
                machine_cost: dec!(292000),
                life_of_machine: dec!(10),
                working_hours_per_day: dec!(8),
                balance_life_of_machine: dec!(10),
                ..InvestmentInput::default()
            }),
            ..MachineRecord::default()
        };
        // 292,000 / 29,200
        let cost = CostCategory::Investment
            .hourly_cost(&record, &WorkingHoursContext::from_hours(dec!(24)));
        assert_eq!(cost, dec!(10));
    }

    #[test]
    fn test_category_costs_slots() {
        let mut costs = CategoryCosts::default();
        costs.set(CostCategory::Power, dec!(43.35));
        costs.set(CostCategory::Tools, dec!(12.5));
        assert_eq!(costs.power_cost, dec!(43.35));
        assert_eq!(costs.total(), dec!(55.85));
        assert_eq!(costs.iter().count(), 7);
        assert_eq!(costs.rounded(1).power_cost, dec!(43.4));
    }

    #[test]
    fn test_total_beyond_decimal_range_is_zero() {
        let mut costs = CategoryCosts::default();
        costs.set(CostCategory::Power, Decimal::MAX);
        costs.set(CostCategory::Salary, dec!(1));
        assert_eq!(costs.total(), Decimal::ZERO);
    }

    #[test]
    fn test_category_costs_accept_form_strings() {
        let costs: CategoryCosts =
            serde_json::from_str(r#"{"power_cost": "43.35", "wages": 145, "salary": ""}"#).unwrap();
        assert_eq!(costs.power_cost, dec!(43.35));
        assert_eq!(costs.wages, dec!(145));
        assert_eq!(costs.salary, Decimal::ZERO);
        assert_eq!(costs.investment_cost, Decimal::ZERO);
    }

    #[test]
    fn test_source_steps_cover_every_step() {
        for step in WizardStep::ALL {
            assert!(CostCategory::ALL.iter().any(|c| c.source_step() == step));
        }
    }
}
