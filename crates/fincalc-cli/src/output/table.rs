use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{format_cell, result_of, row_cells, row_headers, split_result};

/// Format output as tables using the tabled crate: the summary figures first,
/// then one grid per schedule.
pub fn print_table(value: &Value) {
    let result = result_of(value);

    match result {
        Value::Object(res_map) => {
            let (fields, tables) = split_result(res_map);

            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in fields {
                builder.push_record([key.to_string(), format_cell(val)]);
            }
            println!("{}", Table::from(builder));

            for (name, rows) in tables {
                println!("\n{}:", name);
                println!("{}", rows_table(rows));
            }
        }
        _ => println!("{}", format_cell(result)),
    }

    // Print warnings if any
    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn rows_table(rows: &[Value]) -> Table {
    let headers = row_headers(rows);
    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for row in rows {
        builder.push_record(row_cells(row, &headers));
    }
    Table::from(builder)
}
