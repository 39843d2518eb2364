use serde_json::Value;

use super::{scalar_text, schedule_rows};

/// Summary fields worth printing alone, in order of preference.
const SUMMARY_KEYS: [&str; 3] = ["total_amount_paid", "total_interest", "total_payments"];

/// Print just the key answer: the total paid for a summary, or the first
/// period's payment for a bare schedule. An empty schedule has no answer.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_answer(value));
}

fn minimal_answer(value: &Value) -> String {
    if let Some(Value::Object(summary)) = value.pointer("/result/summary") {
        if let Some(val) = SUMMARY_KEYS
            .iter()
            .filter_map(|k| summary.get(*k))
            .find(|v| !v.is_null())
        {
            return scalar_text(val);
        }
    }

    match schedule_rows(value) {
        Some(rows) => rows
            .first()
            .and_then(|r| r.get("payment"))
            .map(scalar_text)
            .unwrap_or_else(|| "(empty schedule)".to_string()),
        None => scalar_text(value),
    }
}
