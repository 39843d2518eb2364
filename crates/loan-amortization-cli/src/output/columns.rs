use serde_json::Value;

/// Schedule columns in display order: (row field, table header).
pub const SCHEDULE_COLUMNS: [(&str, &str); 7] = [
    ("payment_number", "#"),
    ("payment", "Payment"),
    ("payment_per_person", "Per Person"),
    ("principal", "Principal"),
    ("interest", "Interest"),
    ("remaining_balance", "Balance"),
    ("principal_paid_percentage", "Principal Paid"),
];

/// Columns present in this schedule. The per-person column only exists for
/// shared loans, so it is decided from the first row.
pub fn active_columns(rows: &[Value]) -> Vec<(&'static str, &'static str)> {
    let shared = rows
        .first()
        .and_then(|r| r.get("payment_per_person"))
        .is_some();
    SCHEDULE_COLUMNS
        .into_iter()
        .filter(|(key, _)| shared || *key != "payment_per_person")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_per_person_column_only_when_present() {
        let single = vec![json!({"payment_number": 1, "payment": "10"})];
        assert_eq!(active_columns(&single).len(), 6);

        let shared = vec![json!({"payment_number": 1, "payment": "10", "payment_per_person": "5"})];
        assert_eq!(active_columns(&shared).len(), 7);
    }
}
