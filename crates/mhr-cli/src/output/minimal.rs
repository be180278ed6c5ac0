use serde_json::Value;

use super::{cell, result_of};

/// Headline figure of each command, in order of preference.
const PRIORITY_KEYS: [&str; 8] = [
    "machine_hour_rate",
    "total_cost_per_hour",
    "investment_cost_per_hour",
    "space_cost_per_hour",
    "power_cost_per_hour",
    "consumables_cost_per_hour",
    "tool_cost_per_hour",
    "total_wages_per_hour",
];

/// Print just the headline figure, falling back to the first field.
pub fn print_minimal(value: &Value) {
    println!("{}", headline(value));
}

fn headline(value: &Value) -> String {
    let result = result_of(value);
    let Value::Object(map) = result else {
        return cell(result);
    };

    if let Some(val) = PRIORITY_KEYS
        .iter()
        .filter_map(|key| map.get(*key))
        .find(|val| !val.is_null())
    {
        return cell(val);
    }

    match map.iter().next() {
        Some((key, val)) => format!("{}: {}", key, cell(val)),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rate_wins_over_total() {
        let value = json!({"result": {
            "total_cost_per_hour": "43.35",
            "machine_hour_rate": "47.69"
        }});
        assert_eq!(headline(&value), "47.69");
    }

    #[test]
    fn test_section_headline() {
        let value = json!({"result": {"machine_power": "7.5", "power_cost_per_hour": "43.35"}});
        assert_eq!(headline(&value), "43.35");
    }

    #[test]
    fn test_falls_back_to_first_field() {
        let value = json!({"result": {"average_tool_cost_per_month": "5200"}});
        assert_eq!(headline(&value), "average_tool_cost_per_month: 5200");
    }
}
