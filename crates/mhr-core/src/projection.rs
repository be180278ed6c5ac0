//! Running total while the wizard is still being filled in.
//!
//! Every category is priced independently; sections that have not been
//! entered contribute zero, so any partial record yields a result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::{round_for_display, CategoryCosts, CostCategory};
use crate::machine::{MachineRecord, WizardStep};
use crate::types::{Money, WorkingHoursContext};

/// Per-category and running-total cost of a possibly incomplete record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalCostBreakdown {
    #[serde(flatten)]
    pub costs: CategoryCosts,
    pub total_cost_per_hour: Money,
    pub completed_steps: Vec<WizardStep>,
    pub pending_steps: Vec<WizardStep>,
}

impl TotalCostBreakdown {
    pub fn is_complete(&self) -> bool {
        self.pending_steps.is_empty()
    }

    /// Round every figure for display.
    pub fn rounded(&self, dp: u32) -> Self {
        Self {
            costs: self.costs.rounded(dp),
            total_cost_per_hour: round_for_display(self.total_cost_per_hour, dp),
            ..self.clone()
        }
    }
}

/// Cost so far, using the record's own working hours.
pub fn calculate_total_cost_per_hour(record: &MachineRecord) -> TotalCostBreakdown {
    project_total_cost(record, &record.working_hours())
}

/// Cost so far against an explicit working-hours context.
pub fn project_total_cost(record: &MachineRecord, ctx: &WorkingHoursContext) -> TotalCostBreakdown {
    let mut costs = CategoryCosts::default();
    for category in CostCategory::ALL {
        let cost = category.hourly_cost(record, ctx);
        if cost.is_zero() && record.has_step(category.source_step()) {
            debug!(
                category = category.label(),
                "section entered but priced at zero"
            );
        }
        costs.set(category, cost);
    }

    let total_cost_per_hour = costs.total();
    let completed_steps = record.completed_steps();
    let pending_steps = record.pending_steps();

    debug!(
        completed = completed_steps.len(),
        pending = pending_steps.len(),
        total = %total_cost_per_hour,
        "total cost projected"
    );

    TotalCostBreakdown {
        costs,
        total_cost_per_hour,
        completed_steps,
        pending_steps,
    }
}
