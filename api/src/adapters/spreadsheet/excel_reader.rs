//! Excel reader
//!
//! Reads the first worksheet of an `.xlsx`/`.xls` workbook into a raw table.
//! The first row is the header.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDateTime;

use crate::domain::entities::{CellValue, Table, ISO_TIMESTAMP};
use crate::error::LoadError;

/// Read the first worksheet of a workbook
pub fn read_workbook(path: &Path) -> Result<Table, LoadError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::NoSheets(path.display().to_string()))??;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Table::default());
    };

    let columns = header
        .iter()
        .enumerate()
        .map(|(idx, cell)| header_name(idx, cell))
        .collect();
    let mut table = Table::new(columns);

    for row in rows {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        table.push_cells(row.iter().map(cell_value));
    }

    Ok(table)
}

fn header_name(idx: usize, cell: &Data) -> String {
    let name = cell.to_string();
    let name = name.trim();
    if name.is_empty() {
        format!("Unnamed: {}", idx)
    } else {
        name.to_string()
    }
}

/// Convert a workbook cell; date-time cells become timestamps.
pub(crate) fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) if s.trim().is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::Timestamp)
            .unwrap_or(CellValue::Float(dt.as_f64())),
        Data::DateTimeIso(s) => NaiveDateTime::parse_from_str(s, ISO_TIMESTAMP)
            .map(CellValue::Timestamp)
            .unwrap_or_else(|_| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
