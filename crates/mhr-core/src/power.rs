//! Electrical power: the machine's motors plus its share of fans, lights,
//! the shop compressor and other equipment, billed at the grid tariff and
//! scaled by utilization.
//!
//! A diesel genset tariff is derived alongside for comparison. It is never
//! substituted into the power cost on its own; callers opt in through
//! [`PowerInput::with_genset_tariff`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::lenient;
use crate::types::{checked_sum, guarded_div, scaled_product, Count, Money, Percent};

const HUNDRED: Decimal = dec!(100);
const WATTS_PER_KW: Decimal = dec!(1000);

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Power step of the machine wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerInput {
    /// Connected motor load, kW
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub machine_power: Decimal,
    /// Share of the hour the motors draw power, %
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub effective_running_time_of_motors: Percent,
    /// Rating of one fan, W
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub power_of_fan: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub number_of_fans_around_machine: Count,
    /// Rating of one light, W
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub power_of_light: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub number_of_lights_around_machine: Count,
    /// Shop compressor rating, kW
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub compressor_power: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub number_of_machines_connected_with_compressor: Count,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub effective_running_time_of_compressor: Percent,
    /// Everything else attributed to the machine, W
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub power_of_other_electrical_equipment: Decimal,
    /// Share of the hour the machine is producing, %
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub utilization: Percent,
    /// Grid tariff per kWh
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub electricity_unit_rate: Money,
    /// Diesel burned by the genset, litres per hour
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_decimal"
    )]
    pub diesel_consumption_by_genset: Option<Decimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_decimal"
    )]
    pub diesel_cost_per_litre: Option<Money>,
    /// Genset rating, kVA
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_decimal"
    )]
    pub genset_power: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Power input augmented with per-source consumption (kWh per hour) and cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerData {
    #[serde(flatten)]
    pub input: PowerInput,
    pub motor_consumption: Decimal,
    pub fan_consumption: Decimal,
    pub light_consumption: Decimal,
    pub compressor_consumption: Decimal,
    pub other_consumption: Decimal,
    pub total_consumption: Decimal,
    pub power_cost_per_hour: Money,
    /// Informational diesel tariff; absent without usable genset data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genset_unit_rate: Option<Money>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute hourly consumption and power cost.
///
/// Motors: kW x running% / 100
/// Fans, lights: W x count / 1000
/// Compressor: kW x running% / 100 / machines sharing it
/// Other: W / 1000
/// Cost: total kWh x tariff x utilization / 100
pub fn calculate_power_data(input: &PowerInput) -> PowerData {
    let motor_consumption = scaled_product(
        &[input.machine_power, input.effective_running_time_of_motors],
        HUNDRED,
    );
    let fan_consumption = scaled_product(
        &[input.power_of_fan, input.number_of_fans_around_machine],
        WATTS_PER_KW,
    );
    let light_consumption = scaled_product(
        &[input.power_of_light, input.number_of_lights_around_machine],
        WATTS_PER_KW,
    );
    let compressor_consumption = compressor_share(input);
    let other_consumption = guarded_div(input.power_of_other_electrical_equipment, WATTS_PER_KW);

    let total_consumption = checked_sum(&[
        motor_consumption,
        fan_consumption,
        light_consumption,
        compressor_consumption,
        other_consumption,
    ]);

    let power_cost_per_hour = scaled_product(
        &[
            total_consumption,
            input.electricity_unit_rate,
            input.utilization,
        ],
        HUNDRED,
    );

    trace!(%total_consumption, %power_cost_per_hour, "power cost derived");

    PowerData {
        input: input.clone(),
        motor_consumption,
        fan_consumption,
        light_consumption,
        compressor_consumption,
        other_consumption,
        total_consumption,
        power_cost_per_hour,
        genset_unit_rate: genset_unit_rate(input),
    }
}

/// Diesel cost per kVA-hour of genset output.
///
/// `None` unless all three genset fields are supplied and the rating is positive.
pub fn genset_unit_rate(input: &PowerInput) -> Option<Money> {
    let litres_per_hour = input.diesel_consumption_by_genset?;
    let cost_per_litre = input.diesel_cost_per_litre?;
    let rating = input.genset_power.filter(|p| *p > Decimal::ZERO)?;
    Some(scaled_product(&[litres_per_hour, cost_per_litre], rating))
}

impl PowerInput {
    /// A copy billed at the genset tariff instead of the grid tariff.
    ///
    /// Returns `None` when no genset tariff can be derived.
    pub fn with_genset_tariff(&self) -> Option<PowerInput> {
        let rate = genset_unit_rate(self)?;
        Some(PowerInput {
            electricity_unit_rate: rate,
            ..self.clone()
        })
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn compressor_share(input: &PowerInput) -> Decimal {
    if input.number_of_machines_connected_with_compressor <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let compressor_kwh = scaled_product(
        &[
            input.compressor_power,
            input.effective_running_time_of_compressor,
        ],
        HUNDRED,
    );
    guarded_div(
        compressor_kwh,
        input.number_of_machines_connected_with_compressor,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn motor_only() -> PowerInput {
        PowerInput {
            machine_power: dec!(7.5),
            effective_running_time_of_motors: dec!(80),
            utilization: dec!(85),
            electricity_unit_rate: dec!(8.5),
            ..PowerInput::default()
        }
    }

    fn fully_equipped() -> PowerInput {
        PowerInput {
            power_of_fan: dec!(75),
            number_of_fans_around_machine: dec!(2),
            power_of_light: dec!(40),
            number_of_lights_around_machine: dec!(4),
            compressor_power: dec!(15),
            number_of_machines_connected_with_compressor: dec!(5),
            effective_running_time_of_compressor: dec!(60),
            power_of_other_electrical_equipment: dec!(250),
            ..motor_only()
        }
    }

    #[test]
    fn test_motor_only_reference() {
        let result = calculate_power_data(&motor_only());
        assert_eq!(result.motor_consumption, dec!(6));
        assert_eq!(result.total_consumption, dec!(6));
        assert_eq!(result.power_cost_per_hour, dec!(43.35));
    }

    #[test]
    fn test_all_sources_contribute() {
        let result = calculate_power_data(&fully_equipped());
        assert_eq!(result.fan_consumption, dec!(0.15));
        assert_eq!(result.light_consumption, dec!(0.16));
        // 15 x 60% / 5 = 1.8
        assert_eq!(result.compressor_consumption, dec!(1.8));
        assert_eq!(result.other_consumption, dec!(0.25));
        assert_eq!(result.total_consumption, dec!(8.36));
        // 8.36 x 8.5 x 0.85 = 60.401
        assert_eq!(result.power_cost_per_hour, dec!(60.401));
    }

    #[test]
    fn test_compressor_without_connected_machines() {
        let mut input = fully_equipped();
        input.number_of_machines_connected_with_compressor = Decimal::ZERO;
        let result = calculate_power_data(&input);
        assert_eq!(result.compressor_consumption, Decimal::ZERO);
    }

    #[test]
    fn test_zero_utilization_costs_nothing() {
        let mut input = motor_only();
        input.utilization = Decimal::ZERO;
        let result = calculate_power_data(&input);
        assert_eq!(result.total_consumption, dec!(6));
        assert_eq!(result.power_cost_per_hour, Decimal::ZERO);
    }

    #[test]
    fn test_genset_rate_derived() {
        let mut input = motor_only();
        input.diesel_consumption_by_genset = Some(dec!(10));
        input.diesel_cost_per_litre = Some(dec!(90));
        input.genset_power = Some(dec!(62.5));
        let result = calculate_power_data(&input);
        assert_eq!(result.genset_unit_rate, Some(dec!(14.4)));
        // Grid tariff still drives the cost
        assert_eq!(result.power_cost_per_hour, dec!(43.35));
    }

    #[test]
    fn test_genset_zero_rating_is_absent() {
        let mut input = motor_only();
        input.diesel_consumption_by_genset = Some(dec!(10));
        input.diesel_cost_per_litre = Some(dec!(90));
        input.genset_power = Some(Decimal::ZERO);
        let result = calculate_power_data(&input);
        assert_eq!(result.genset_unit_rate, None);
    }

    #[test]
    fn test_genset_partial_fields_is_absent() {
        let mut input = motor_only();
        input.genset_power = Some(dec!(62.5));
        assert_eq!(genset_unit_rate(&input), None);
        assert!(input.with_genset_tariff().is_none());
    }

    #[test]
    fn test_with_genset_tariff_overrides_unit_rate() {
        let mut input = motor_only();
        input.diesel_consumption_by_genset = Some(dec!(10));
        input.diesel_cost_per_litre = Some(dec!(90));
        input.genset_power = Some(dec!(62.5));
        let on_genset = input.with_genset_tariff().unwrap();
        assert_eq!(on_genset.electricity_unit_rate, dec!(14.4));
        // 6 kWh x 14.4 x 0.85 = 73.44
        assert_eq!(calculate_power_data(&on_genset).power_cost_per_hour, dec!(73.44));
    }

    #[test]
    fn test_empty_input_is_zero() {
        let result = calculate_power_data(&PowerInput::default());
        assert_eq!(result.total_consumption, Decimal::ZERO);
        assert_eq!(result.power_cost_per_hour, Decimal::ZERO);
        assert_eq!(result.genset_unit_rate, None);
    }

    #[test]
    fn test_large_load_divides_before_multiplying() {
        let input = PowerInput {
            machine_power: Decimal::from_i128_with_scale(10_i128.pow(24), 0),
            effective_running_time_of_motors: dec!(100),
            utilization: dec!(100),
            electricity_unit_rate: dec!(10000),
            ..PowerInput::default()
        };
        let result = calculate_power_data(&input);
        assert_eq!(result.total_consumption, input.machine_power);
        // 1e24 x 1e4 x 100 overflows before the division by 100
        assert_eq!(
            result.power_cost_per_hour,
            Decimal::from_i128_with_scale(10_i128.pow(28), 0)
        );
    }

    #[test]
    fn test_consumption_beyond_decimal_range_is_zero() {
        let huge = Decimal::from_i128_with_scale(5 * 10_i128.pow(28), 0);
        let input = PowerInput {
            machine_power: huge,
            effective_running_time_of_motors: dec!(100),
            compressor_power: huge,
            effective_running_time_of_compressor: dec!(100),
            number_of_machines_connected_with_compressor: dec!(1),
            utilization: dec!(100),
            electricity_unit_rate: dec!(1),
            ..PowerInput::default()
        };
        let result = calculate_power_data(&input);
        assert_eq!(result.motor_consumption, huge);
        assert_eq!(result.compressor_consumption, huge);
        assert_eq!(result.total_consumption, Decimal::ZERO);
        assert_eq!(result.power_cost_per_hour, Decimal::ZERO);
    }
}
