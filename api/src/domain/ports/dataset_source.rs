//! Dataset source port
//!
//! Supplies a raw table for a logical dataset name. Failures never abort the
//! session: they are reported through `LoadStatus` and the table is empty.

use serde::Serialize;

use crate::domain::entities::Table;

/// Outcome of loading one dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadStatus {
    /// A file was read and produced rows
    Loaded {
        path: String,
        rows: usize,
        columns: Vec<String>,
    },
    /// A file was read but contained no rows
    Empty { path: String },
    /// A file exists but could not be read
    Failed { path: String, error: String },
    /// No file with a supported extension exists
    Missing,
}

impl LoadStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadStatus::Loaded { .. })
    }
}

impl std::fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadStatus::Loaded { path, rows, .. } => {
                write!(f, "loaded {} ({} rows)", path, rows)
            }
            LoadStatus::Empty { path } => write!(f, "{} has no rows", path),
            LoadStatus::Failed { path, error } => write!(f, "failed to read {}: {}", path, error),
            LoadStatus::Missing => write!(f, "no .xlsx, .xls or .csv file found"),
        }
    }
}

/// A table together with how it was obtained
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetLoad {
    pub table: Table,
    pub status: LoadStatus,
}

impl DatasetLoad {
    pub fn missing() -> Self {
        Self {
            table: Table::default(),
            status: LoadStatus::Missing,
        }
    }
}

/// Source of raw dataset tables
pub trait DatasetSource {
    /// Load the dataset with the given logical name (no extension)
    fn load(&self, dataset: &str) -> DatasetLoad;
}
