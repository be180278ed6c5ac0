//! The machine record the wizard fills in step by step.
//!
//! A record is an explicit value handed to the calculators; nothing in the
//! engine holds a "current machine". Sections not yet entered are `None`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::consumables::ConsumablesInput;
use crate::investment::InvestmentInput;
use crate::labor::{OverheadsInput, ToolsWagesInput};
use crate::lenient;
use crate::power::PowerInput;
use crate::space::SpaceInput;
use crate::types::{Percent, WorkingHoursContext};

/// Input steps of the wizard, in the order they are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Investment,
    Space,
    Power,
    Consumables,
    ToolsWages,
    Overheads,
}

impl WizardStep {
    pub const ALL: [WizardStep; 6] = [
        WizardStep::Investment,
        WizardStep::Space,
        WizardStep::Power,
        WizardStep::Consumables,
        WizardStep::ToolsWages,
        WizardStep::Overheads,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Investment => "Investment",
            WizardStep::Space => "Space",
            WizardStep::Power => "Power",
            WizardStep::Consumables => "Consumables",
            WizardStep::ToolsWages => "Tools & Wages",
            WizardStep::Overheads => "Overheads",
        }
    }
}

/// Everything entered for one machine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineRecord {
    /// Assigned by the store on save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_data: Option<InvestmentInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_data: Option<SpaceInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_data: Option<PowerInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumables_data: Option<ConsumablesInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools_wages_data: Option<ToolsWagesInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overheads_data: Option<OverheadsInput>,
    /// Profit chosen on the summary step, if any
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_decimal"
    )]
    pub profit_percentage: Option<Percent>,
}

impl MachineRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn has_step(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Investment => self.investment_data.is_some(),
            WizardStep::Space => self.space_data.is_some(),
            WizardStep::Power => self.power_data.is_some(),
            WizardStep::Consumables => self.consumables_data.is_some(),
            WizardStep::ToolsWages => self.tools_wages_data.is_some(),
            WizardStep::Overheads => self.overheads_data.is_some(),
        }
    }

    pub fn completed_steps(&self) -> Vec<WizardStep> {
        WizardStep::ALL
            .into_iter()
            .filter(|s| self.has_step(*s))
            .collect()
    }

    pub fn pending_steps(&self) -> Vec<WizardStep> {
        WizardStep::ALL
            .into_iter()
            .filter(|s| !self.has_step(*s))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        WizardStep::ALL.iter().all(|s| self.has_step(*s))
    }

    /// Time base for every hourly figure, taken from the investment step.
    ///
    /// Without investment data there are no working hours, so every
    /// time-based category prices at zero.
    pub fn working_hours(&self) -> WorkingHoursContext {
        self.investment_data
            .as_ref()
            .map(InvestmentInput::working_hours)
            .unwrap_or_else(|| WorkingHoursContext::from_hours(Decimal::ZERO))
    }
}
