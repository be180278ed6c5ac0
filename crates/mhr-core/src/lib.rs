pub mod category;
pub mod consumables;
pub mod error;
pub mod investment;
pub mod labor;
pub mod lenient;
pub mod machine;
pub mod power;
pub mod projection;
pub mod rate;
pub mod space;
pub mod store;
pub mod tools;
pub mod types;
pub mod validation;

pub use category::{CategoryCosts, CostCategory};
pub use consumables::{calculate_consumables_data, ConsumablesData, ConsumablesInput};
pub use error::MhrError;
pub use investment::{calculate_investment_data, InvestmentData, InvestmentInput};
pub use labor::{
    calculate_wages_salaries_data, OverheadsInput, Role, ToolsWagesInput, WagesSalariesData,
};
pub use machine::{MachineRecord, WizardStep};
pub use power::{calculate_power_data, PowerData, PowerInput};
pub use projection::{calculate_total_cost_per_hour, TotalCostBreakdown};
pub use rate::{calculate_final_machine_hour_rate, CostBreakdown, DEFAULT_PROFIT_PERCENTAGE};
pub use space::{calculate_space_data, SpaceData, SpaceInput};
pub use store::{MachineStore, MemoryStore};
pub use tools::{calculate_tool_cost, ToolCostData};
pub use types::*;

/// Standard result type for the fallible edges (persistence, parsing, config)
pub type MhrResult<T> = Result<T, MhrError>;
