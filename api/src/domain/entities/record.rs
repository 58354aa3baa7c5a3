//! Raw tabular data
//!
//! Cells and tables exactly as read from a spreadsheet or CSV source, before
//! the column mapping turns them into typed records. Raw tables are what the
//! JSON export serializes, so source column names and order are preserved.

use chrono::{NaiveDateTime, Timelike};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// ISO-8601 layout used for timestamp cells
pub const ISO_TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%S";

/// A single spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Timestamp(NaiveDateTime),
}

impl CellValue {
    /// Infer a cell from raw CSV text: integer, then float, then text.
    pub fn from_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() {
                return CellValue::Float(f);
            }
        }
        CellValue::Text(raw.to_string())
    }

    /// Text form of the cell, `None` for empty or blank cells.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_string())
            }
            CellValue::Integer(i) => Some(i.to_string()),
            CellValue::Float(f) if f.is_finite() => Some(f.to_string()),
            CellValue::Float(_) => None,
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::Timestamp(ts) => {
                if ts.time().num_seconds_from_midnight() == 0 {
                    Some(ts.format("%Y-%m-%d").to_string())
                } else {
                    Some(ts.format(ISO_TIMESTAMP).to_string())
                }
            }
        }
    }

    /// Numeric coercion; non-numeric cells are absent, never zero.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            CellValue::Integer(i) => *i as f64,
            CellValue::Float(f) => *f,
            CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Integer coercion; integral floats (as Excel stores ids) are accepted.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Integer(i) => Some(*i),
            CellValue::Text(s) => s
                .trim()
                .parse::<i64>()
                .ok()
                .or_else(|| self.as_f64().and_then(integral)),
            CellValue::Float(f) => integral(*f),
            _ => None,
        }
    }
}

fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Empty => serializer.serialize_none(),
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Integer(i) => serializer.serialize_i64(*i),
            CellValue::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            CellValue::Float(_) => serializer.serialize_none(),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::Timestamp(ts) => {
                serializer.serialize_str(&ts.format(ISO_TIMESTAMP).to_string())
            }
        }
    }
}

/// One source row: column name to cell, in source column order
pub type Row = IndexMap<String, CellValue>;

/// A uniform sequence of rows sharing one header
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Push a row from cells aligned with `columns`. Short rows are padded
    /// with empty cells, extra cells are dropped.
    pub fn push_cells(&mut self, cells: impl IntoIterator<Item = CellValue>) {
        let mut cells = cells.into_iter();
        let row: Row = self
            .columns
            .iter()
            .map(|col| (col.clone(), cells.next().unwrap_or(CellValue::Empty)))
            .collect();
        self.rows.push(row);
    }

    /// First candidate column present in the header (trimmed, case-insensitive).
    pub fn find_column<'a>(&'a self, candidates: &[String]) -> Option<&'a str> {
        candidates.iter().find_map(|candidate| {
            let candidate = candidate.trim();
            self.columns
                .iter()
                .find(|col| col.trim().eq_ignore_ascii_case(candidate))
                .map(String::as_str)
        })
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.rows)
    }
}

/// The four logical datasets the assistant works with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Products,
    Stores,
    Customers,
    Orders,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 4] = [
        DatasetKind::Products,
        DatasetKind::Stores,
        DatasetKind::Customers,
        DatasetKind::Orders,
    ];

    /// Key used in the JSON export document
    pub fn key(&self) -> &'static str {
        match self {
            DatasetKind::Products => "products",
            DatasetKind::Stores => "stores",
            DatasetKind::Customers => "customers",
            DatasetKind::Orders => "orders",
        }
    }
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Raw tables for all four datasets
#[derive(Debug, Clone, Default, Serialize)]
pub struct DatasetTables {
    pub products: Table,
    pub stores: Table,
    pub customers: Table,
    pub orders: Table,
}

impl DatasetTables {
    pub fn get(&self, kind: DatasetKind) -> &Table {
        match kind {
            DatasetKind::Products => &self.products,
            DatasetKind::Stores => &self.stores,
            DatasetKind::Customers => &self.customers,
            DatasetKind::Orders => &self.orders,
        }
    }

    pub fn get_mut(&mut self, kind: DatasetKind) -> &mut Table {
        match kind {
            DatasetKind::Products => &mut self.products,
            DatasetKind::Stores => &mut self.stores,
            DatasetKind::Customers => &mut self.customers,
            DatasetKind::Orders => &mut self.orders,
        }
    }
}
