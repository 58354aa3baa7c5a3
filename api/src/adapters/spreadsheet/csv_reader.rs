//! CSV reader
//!
//! Reads a headered CSV file into a raw table, inferring each cell's type.

use std::io::Read;
use std::path::Path;

use crate::domain::entities::{CellValue, Table};
use crate::error::LoadError;

/// Read a CSV file from disk
pub fn read_csv(path: &Path) -> Result<Table, LoadError> {
    let reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    read_records(reader)
}

/// Read CSV from any reader (used for in-memory sources)
pub fn read_csv_from<R: Read>(input: R) -> Result<Table, LoadError> {
    let reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    read_records(reader)
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Table, LoadError> {
    let columns = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let mut table = Table::new(columns);

    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        table.push_cells(record.iter().map(CellValue::from_text));
    }

    Ok(table)
}
