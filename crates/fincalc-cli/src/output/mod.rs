pub mod csv_out;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Pretty-print JSON to stdout.
fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

/// The `result` object of an envelope, or the value itself when it has none.
pub(crate) fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

/// Split a result object into its summary fields and its row tables
/// (arrays of objects, such as `schedule`).
pub(crate) fn split_result(
    result: &Map<String, Value>,
) -> (Vec<(&str, &Value)>, Vec<(&str, &[Value])>) {
    let mut fields = Vec::new();
    let mut tables = Vec::new();

    for (key, val) in result {
        match val {
            Value::Array(rows) if rows.iter().all(Value::is_object) && !rows.is_empty() => {
                tables.push((key.as_str(), rows.as_slice()));
            }
            _ => fields.push((key.as_str(), val)),
        }
    }

    (fields, tables)
}

/// Column headers of a row table, in the order of the first row's fields.
pub(crate) fn row_headers(rows: &[Value]) -> Vec<String> {
    match rows.first() {
        Some(Value::Object(first)) => first.keys().cloned().collect(),
        _ => Vec::new(),
    }
}

/// Cells of one row, aligned with `headers`.
pub(crate) fn row_cells(row: &Value, headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .map(|h| row.get(h.as_str()).map(format_cell).unwrap_or_default())
        .collect()
}

pub(crate) fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_cell).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loan_envelope() -> Value {
        json!({
            "result": {
                "payment": "550.81",
                "total_paid": "1652.43",
                "schedule": [
                    { "period": 0, "payment": "0", "interest": "0", "principal": "0", "balance": "1500" },
                    { "period": 1, "payment": "550.81", "interest": "75.00", "principal": "475.81", "balance": "1024.19" }
                ]
            },
            "methodology": "Fixed-Payment Loan Amortization",
            "warnings": []
        })
    }

    #[test]
    fn test_split_result_separates_schedule() {
        let envelope = loan_envelope();
        let result = result_of(&envelope).as_object().unwrap();
        let (fields, tables) = split_result(result);

        let names: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(names, vec!["payment", "total_paid"]);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].0, "schedule");
        assert_eq!(tables[0].1.len(), 2);
    }

    #[test]
    fn test_row_headers_keep_field_order() {
        let envelope = loan_envelope();
        let rows = envelope["result"]["schedule"].as_array().unwrap();
        assert_eq!(
            row_headers(rows),
            vec!["period", "payment", "interest", "principal", "balance"]
        );
        assert_eq!(
            row_cells(&rows[1], &row_headers(rows)),
            vec!["1", "550.81", "75.00", "475.81", "1024.19"]
        );
    }

    #[test]
    fn test_result_of_without_envelope() {
        let bare = json!({ "payment": "1" });
        assert_eq!(result_of(&bare), &bare);
    }
}
