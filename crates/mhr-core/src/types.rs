use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Percentages as entered on the wizard forms (12 = 12%). Never as fractions.
pub type Percent = Decimal;

/// Hour counts (per day, per year, over a machine's life)
pub type Hours = Decimal;

/// Head counts, machine counts and other whole-ish quantities
pub type Count = Decimal;

/// Calendar days used to prorate annual figures (investment, space).
pub const DAYS_PER_YEAR: Decimal = dec!(365);

/// Working days used to prorate monthly figures (consumables, tools, labor).
pub const WORKING_DAYS_PER_MONTH: Decimal = dec!(26);

/// Shift length assumed when no investment data has been entered yet.
pub const DEFAULT_WORKING_HOURS_PER_DAY: Hours = dec!(8);

/// Months per year, for annual maintenance and rent.
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// The shared time base every hourly calculator reads.
///
/// The hours-per-day figure comes from the investment step of the wizard;
/// the working-days figure fixes the monthly convention. Annual figures are
/// always spread over [`DAYS_PER_YEAR`], monthly figures over
/// `working_days_per_month`. The two conventions intentionally differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHoursContext {
    pub hours_per_day: Hours,
    pub working_days_per_month: Decimal,
}

impl Default for WorkingHoursContext {
    fn default() -> Self {
        Self {
            hours_per_day: DEFAULT_WORKING_HOURS_PER_DAY,
            working_days_per_month: WORKING_DAYS_PER_MONTH,
        }
    }
}

impl WorkingHoursContext {
    /// Context for a shift of `hours_per_day` on the 26-day month.
    pub fn from_hours(hours_per_day: Hours) -> Self {
        Self {
            hours_per_day,
            working_days_per_month: WORKING_DAYS_PER_MONTH,
        }
    }

    /// Operating hours in a 365-day year.
    pub fn hours_per_year(&self) -> Hours {
        product(&[self.hours_per_day, DAYS_PER_YEAR])
    }

    /// Operating hours in a working month.
    pub fn hours_per_month(&self) -> Hours {
        product(&[self.hours_per_day, self.working_days_per_month])
    }

    /// Whether there is any time base to spread costs over.
    pub fn is_usable(&self) -> bool {
        self.hours_per_day > Decimal::ZERO && self.working_days_per_month > Decimal::ZERO
    }
}

/// Divide, yielding zero when the divisor is not positive or the quotient
/// would overflow. Every cost formula divides through this.
pub fn guarded_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}

/// Multiply all factors, yielding zero on overflow.
pub fn product(factors: &[Decimal]) -> Decimal {
    checked_product(factors).unwrap_or(Decimal::ZERO)
}

/// Add all terms, yielding zero on overflow. Subtract by passing `-x`.
pub fn checked_sum(terms: &[Decimal]) -> Decimal {
    terms
        .iter()
        .try_fold(Decimal::ZERO, |acc, t| acc.checked_add(*t))
        .unwrap_or(Decimal::ZERO)
}

/// `factors[0] x factors[1] x ... / divisor`.
///
/// Multiplies first for precision. When the intermediate product overflows
/// but the quotient fits, the leading factor is divided down before
/// multiplying. Zero when the divisor is not positive or nothing fits.
pub fn scaled_product(factors: &[Decimal], divisor: Decimal) -> Decimal {
    if divisor <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    if let Some(p) = checked_product(factors) {
        return p.checked_div(divisor).unwrap_or(Decimal::ZERO);
    }
    let Some((first, rest)) = factors.split_first() else {
        return Decimal::ZERO;
    };
    first
        .checked_div(divisor)
        .and_then(|head| rest.iter().try_fold(head, |acc, f| acc.checked_mul(*f)))
        .unwrap_or(Decimal::ZERO)
}

fn checked_product(factors: &[Decimal]) -> Option<Decimal> {
    factors
        .iter()
        .try_fold(Decimal::ONE, |acc, f| acc.checked_mul(*f))
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
