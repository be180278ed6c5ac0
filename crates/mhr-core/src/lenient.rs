//! Lenient numeric deserialization for wizard form data.
//!
//! Form fields arrive as JSON numbers, numeric strings, empty strings,
//! `null`, or not at all. Anything that is not a readable number is taken
//! as zero (or `None` for optional fields) so that partially completed
//! wizard steps still produce a result.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Deserialize a required numeric field, defaulting unreadable values to zero.
///
/// Use together with `#[serde(default)]` so that a missing key also reads as zero.
pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_value(&value).unwrap_or(Decimal::ZERO))
}

/// Deserialize an optional numeric field; unreadable values become `None`.
pub fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_value))
}

/// Read a JSON value as a decimal, if it holds a number or a numeric string.
pub fn parse_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_str(&n.to_string()),
        Value::String(s) => parse_str(s),
        _ => None,
    }
}

/// Parse plain (`"12.5"`) or scientific (`"1e-3"`) notation.
pub fn parse_str(s: &str) -> Option<Decimal> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "decimal")]
        amount: Decimal,
        #[serde(default, deserialize_with = "optional_decimal")]
        extra: Option<Decimal>,
    }

    fn probe(v: Value) -> Probe {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_number_and_numeric_string() {
        assert_eq!(probe(json!({ "amount": 12.5 })).amount, dec!(12.5));
        assert_eq!(probe(json!({ "amount": " 1500000 " })).amount, dec!(1500000));
    }

    #[test]
    fn test_missing_null_and_garbage_read_as_zero() {
        assert_eq!(probe(json!({})).amount, Decimal::ZERO);
        assert_eq!(probe(json!({ "amount": null })).amount, Decimal::ZERO);
        assert_eq!(probe(json!({ "amount": "abc" })).amount, Decimal::ZERO);
        assert_eq!(probe(json!({ "amount": "" })).amount, Decimal::ZERO);
        assert_eq!(probe(json!({ "amount": true })).amount, Decimal::ZERO);
        assert_eq!(probe(json!({ "amount": [1, 2] })).amount, Decimal::ZERO);
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_str("1e3"), Some(dec!(1000)));
        assert_eq!(parse_str("2.5e-2"), Some(dec!(0.025)));
    }

    #[test]
    fn test_optional_field() {
        assert_eq!(probe(json!({})).extra, None);
        assert_eq!(probe(json!({ "extra": "n/a" })).extra, None);
        assert_eq!(probe(json!({ "extra": "4" })).extra, Some(dec!(4)));
    }

    #[test]
    fn test_out_of_range_number_is_unreadable() {
        assert_eq!(parse_str("1e300"), None);
    }
}
