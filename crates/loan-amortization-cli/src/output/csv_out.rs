use serde_json::Value;
use std::io;

use super::columns::active_columns;
use super::{scalar_text, schedule_rows};

/// Write output as CSV to stdout. Schedules become one record per period;
/// anything else falls back to field/value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Err(e) = write_csv(&mut wtr, value).and_then(|_| wtr.flush().map_err(csv::Error::from)) {
        tracing::error!("CSV output error: {e}");
    }
}

fn write_csv<W: io::Write>(wtr: &mut csv::Writer<W>, value: &Value) -> Result<(), csv::Error> {
    if let Some(rows) = schedule_rows(value) {
        let columns = active_columns(rows);
        wtr.write_record(columns.iter().map(|(key, _)| *key))?;
        for row in rows {
            wtr.write_record(
                columns
                    .iter()
                    .map(|(key, _)| row.get(*key).map(scalar_text).unwrap_or_default()),
            )?;
        }
        return Ok(());
    }

    wtr.write_record(["field", "value"])?;
    if let Value::Object(map) = value {
        for (key, val) in map {
            wtr.write_record([key.as_str(), &scalar_text(val)])?;
        }
    } else {
        wtr.write_record(["value", &scalar_text(value)])?;
    }
    Ok(())
}
