//! Factory space: the machine's own floor area plus its share of common
//! area, charged at the factory rent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::lenient;
use crate::types::{
    checked_sum, guarded_div, product, scaled_product, Count, Money, WorkingHoursContext,
    MONTHS_PER_YEAR,
};

/// Space step of the machine wizard. Areas are in square feet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceInput {
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub factory_rent_per_month: Money,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub factory_space_in_sq_ft: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub space_occupied_by_machine: Decimal,
    /// Machines sharing the common area
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub number_of_machines_in_factory: Count,
    /// Aisles, stores and other area not assigned to any one machine
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub common_space_in_sq_ft: Decimal,
}

/// Space input augmented with annual and hourly space cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceData {
    #[serde(flatten)]
    pub input: SpaceInput,
    pub machine_space_cost_per_year: Money,
    pub common_space_cost_per_year: Money,
    pub space_cost_per_hour: Money,
}

/// Allocate factory rent to one machine.
///
/// Machine share: rent x 12 x occupied / factory area
/// Common share: rent x 12 x common / factory area / machines in factory
/// Hourly: (machine + common) / (hours/day x 365)
pub fn calculate_space_data(input: &SpaceInput, ctx: &WorkingHoursContext) -> SpaceData {
    let annual_rent = product(&[input.factory_rent_per_month, MONTHS_PER_YEAR]);

    let machine_space_cost_per_year = scaled_product(
        &[annual_rent, input.space_occupied_by_machine],
        input.factory_space_in_sq_ft,
    );

    let common_space_cost_per_year = if input.number_of_machines_in_factory > Decimal::ZERO {
        let common_rent = scaled_product(
            &[annual_rent, input.common_space_in_sq_ft],
            input.factory_space_in_sq_ft,
        );
        guarded_div(common_rent, input.number_of_machines_in_factory)
    } else {
        Decimal::ZERO
    };

    let space_cost_per_hour = guarded_div(
        checked_sum(&[machine_space_cost_per_year, common_space_cost_per_year]),
        ctx.hours_per_year(),
    );

    trace!(%space_cost_per_hour, "space cost derived");

    SpaceData {
        input: input.clone(),
        machine_space_cost_per_year,
        common_space_cost_per_year,
        space_cost_per_hour,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn shop_floor() -> SpaceInput {
        SpaceInput {
            factory_rent_per_month: dec!(50000),
            factory_space_in_sq_ft: dec!(10000),
            space_occupied_by_machine: dec!(200),
            number_of_machines_in_factory: dec!(20),
            common_space_in_sq_ft: dec!(2000),
        }
    }

    #[test]
    fn test_machine_and_common_share() {
        let result = calculate_space_data(&shop_floor(), &WorkingHoursContext::default());
        // 600,000 x 200 / 10,000 = 12,000
        assert_eq!(result.machine_space_cost_per_year, dec!(12000));
        // 600,000 x 2,000 / 10,000 / 20 = 6,000
        assert_eq!(result.common_space_cost_per_year, dec!(6000));
        // 18,000 / 2,920 = 6.16
        assert_eq!(result.space_cost_per_hour.round_dp(2), dec!(6.16));
    }

    #[test]
    fn test_no_machines_means_no_common_share() {
        let mut input = shop_floor();
        input.number_of_machines_in_factory = Decimal::ZERO;
        let result = calculate_space_data(&input, &WorkingHoursContext::default());
        assert_eq!(result.common_space_cost_per_year, Decimal::ZERO);
        assert_eq!(result.machine_space_cost_per_year, dec!(12000));
    }

    #[test]
    fn test_zero_factory_space_is_guarded() {
        let mut input = shop_floor();
        input.factory_space_in_sq_ft = Decimal::ZERO;
        let result = calculate_space_data(&input, &WorkingHoursContext::default());
        assert_eq!(result.machine_space_cost_per_year, Decimal::ZERO);
        assert_eq!(result.common_space_cost_per_year, Decimal::ZERO);
        assert_eq!(result.space_cost_per_hour, Decimal::ZERO);
    }

    #[test]
    fn test_zero_working_hours_is_guarded() {
        let ctx = WorkingHoursContext::from_hours(Decimal::ZERO);
        let result = calculate_space_data(&shop_floor(), &ctx);
        assert_eq!(result.space_cost_per_hour, Decimal::ZERO);
        assert_eq!(result.machine_space_cost_per_year, dec!(12000));
    }

    #[test]
    fn test_two_shifts_halve_hourly_cost() {
        let one = calculate_space_data(&shop_floor(), &WorkingHoursContext::from_hours(dec!(8)));
        let two = calculate_space_data(&shop_floor(), &WorkingHoursContext::from_hours(dec!(16)));
        let diff = (one.space_cost_per_hour - two.space_cost_per_hour * dec!(2)).abs();
        assert!(diff < dec!(0.0000000001), "diff {}", diff);
    }

    #[test]
    fn test_rent_near_decimal_limit() {
        let input = SpaceInput {
            factory_rent_per_month: Decimal::from_i128_with_scale(6 * 10_i128.pow(27), 0),
            factory_space_in_sq_ft: dec!(1),
            space_occupied_by_machine: dec!(1),
            number_of_machines_in_factory: dec!(1),
            common_space_in_sq_ft: dec!(1),
        };
        let annual = Decimal::from_i128_with_scale(72 * 10_i128.pow(27), 0);
        let result = calculate_space_data(&input, &WorkingHoursContext::default());
        assert_eq!(result.machine_space_cost_per_year, annual);
        assert_eq!(result.common_space_cost_per_year, annual);
        // both shares together exceed the decimal range
        assert_eq!(result.space_cost_per_hour, Decimal::ZERO);
    }

    #[test]
    fn test_large_floor_divides_before_multiplying() {
        let input = SpaceInput {
            factory_rent_per_month: Decimal::from_i128_with_scale(10_i128.pow(26), 0),
            factory_space_in_sq_ft: dec!(1000),
            space_occupied_by_machine: dec!(500),
            ..SpaceInput::default()
        };
        let result = calculate_space_data(&input, &WorkingHoursContext::default());
        // 1.2e27 x 500 overflows; 1.2e27 / 1000 x 500 does not
        assert_eq!(
            result.machine_space_cost_per_year,
            Decimal::from_i128_with_scale(6 * 10_i128.pow(26), 0)
        );
        assert!(result.space_cost_per_hour > Decimal::ZERO);
    }
}
