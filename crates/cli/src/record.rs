//! Record CSV loading.
//!
//! A record is one spreadsheet row: a header row naming the column labels
//! and a first data row carrying the values. Extra data rows are ignored;
//! a short data row leaves the trailing columns absent (not empty), so the
//! driver skips them instead of blanking fields.

use gridfill_protocol::Record;

use crate::error::CliError;

pub fn load_record(csv_text: &str) -> Result<Record, CliError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| CliError::parse(format!("record CSV: {e}")))?
        .clone();

    let first_row = reader
        .records()
        .next()
        .ok_or_else(|| CliError::parse("record CSV has no data row"))?
        .map_err(|e| CliError::parse(format!("record CSV: {e}")))?;

    let mut record = Record::new();
    for (i, label) in headers.iter().enumerate() {
        if let Some(value) = first_row.get(i) {
            record.insert(label.to_string(), value.to_string());
        }
    }
    Ok(record)
}
