use serde_json::Value;

use super::{format_cell, result_of};

/// Summary fields, in order of priority.
const PRIORITY_KEYS: [&str; 2] = ["payment", "final_value"];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_answer(value));
}

/// The summary figure, falling back to the first field of the result.
fn minimal_answer(value: &Value) -> String {
    let result_obj = result_of(value);

    if let Value::Object(map) = result_obj {
        for key in &PRIORITY_KEYS {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    return format_cell(val);
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_cell(val));
        }
    }

    format_cell(result_obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_loan_payment_is_the_answer() {
        let v = json!({ "result": { "total_paid": "10661.88", "payment": "888.49" } });
        assert_eq!(minimal_answer(&v), "888.49");
    }

    #[test]
    fn test_investment_final_value_is_the_answer() {
        let v = json!({ "result": { "final_value": "1051.16", "total_interest": "51.16" } });
        assert_eq!(minimal_answer(&v), "1051.16");
    }

    #[test]
    fn test_fallback_to_first_field() {
        let v = json!({ "result": { "other": 3 } });
        assert_eq!(minimal_answer(&v), "other: 3");
    }
}
