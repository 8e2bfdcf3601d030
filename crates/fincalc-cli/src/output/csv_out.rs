use serde_json::Value;
use std::io::{self, Write};

use super::{format_cell, result_of, row_cells, row_headers, split_result};

/// Write output as CSV to stdout.
///
/// A result carrying a schedule is written as that schedule, one line per
/// period. Anything else becomes a two-column `field,value` listing.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value) {
        eprintln!("CSV output error: {}", e);
    }
}

fn write_csv<W: Write>(writer: W, value: &Value) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    let result = result_of(value);

    match result {
        Value::Object(map) => {
            let (fields, tables) = split_result(map);
            if let Some((_, rows)) = tables.first() {
                let headers = row_headers(rows);
                wtr.write_record(&headers)?;
                for row in rows.iter() {
                    wtr.write_record(row_cells(row, &headers))?;
                }
            } else {
                wtr.write_record(["field", "value"])?;
                for (key, val) in fields {
                    wtr.write_record([key, format_cell(val).as_str()])?;
                }
            }
        }
        _ => wtr.write_record([format_cell(result)])?,
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schedule_written_as_rows() {
        let envelope = json!({
            "result": {
                "final_value": "1051.16",
                "schedule": [
                    { "period": 0, "opening": "1000", "interest_earned": "0", "closing": "1000" },
                    { "period": 1, "opening": "1000.00", "interest_earned": "4.17", "closing": "1004.17" }
                ]
            }
        });
        let mut buf = Vec::new();
        write_csv(&mut buf, &envelope).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "period,opening,interest_earned,closing\n0,1000,0,1000\n1,1000.00,4.17,1004.17\n"
        );
    }

    #[test]
    fn test_flat_result_written_as_fields() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &json!({ "result": { "payment": "888.49" } })).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "field,value\npayment,888.49\n");
    }
}
