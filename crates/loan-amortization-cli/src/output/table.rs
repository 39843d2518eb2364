use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::columns::active_columns;
use super::{scalar_text, schedule_rows};

/// Format output as tables using the tabled crate: the summary (if any) as
/// field/value pairs, then the schedule one row per period.
pub fn print_table(value: &Value) {
    if let Some(Value::Object(summary)) = value.pointer("/result/summary") {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in summary {
            builder.push_record([key.as_str(), &scalar_text(val)]);
        }
        println!("{}\n", Table::from(builder));
    }

    match schedule_rows(value) {
        Some(rows) if rows.is_empty() => println!("(empty schedule)"),
        Some(rows) => println!("{}", schedule_table(rows)),
        None => println!("{}", scalar_text(value)),
    }

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn schedule_table(rows: &[Value]) -> Table {
    let columns = active_columns(rows);
    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|(_, header)| *header));

    for row in rows {
        builder.push_record(
            columns
                .iter()
                .map(|(key, _)| row.get(*key).map(scalar_text).unwrap_or_default()),
        );
    }

    Table::from(builder)
}
