//! JSON export
//!
//! One-way dump of the four raw tables to a single JSON document with keys
//! `products`, `stores`, `customers` and `orders`. Timestamp cells are written
//! as ISO-8601 strings. The export is for inspection and hand-off only; it is
//! never read back at query time.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::entities::{DatasetKind, DatasetTables};
use crate::error::LoadError;

/// What a read-back of an export file contains
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    /// Record count per top-level key, in export order
    pub counts: IndexMap<String, usize>,
    /// First product record, if any
    pub first_product: Option<serde_json::Value>,
}

/// Render the export document
pub fn export_document(tables: &DatasetTables) -> Result<String, LoadError> {
    Ok(serde_json::to_string_pretty(tables)?)
}

/// Write the export document to `path` (temp file + rename)
pub fn export_json(tables: &DatasetTables, path: &Path) -> Result<(), LoadError> {
    let json = export_document(tables)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json)?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "JSON export written");
    Ok(())
}

/// Read an export file back and summarise it
pub fn verify_export(path: &Path) -> Result<ExportSummary, LoadError> {
    let content = std::fs::read_to_string(path)?;
    let document: serde_json::Value = serde_json::from_str(&content)?;

    let counts = DatasetKind::ALL
        .iter()
        .map(|kind| {
            let count = document
                .get(kind.key())
                .and_then(|v| v.as_array())
                .map(Vec::len)
                .unwrap_or(0);
            (kind.key().to_string(), count)
        })
        .collect();

    let first_product = document
        .get("products")
        .and_then(|v| v.as_array())
        .and_then(|products| products.first())
        .cloned();

    Ok(ExportSummary {
        path: path.to_path_buf(),
        counts,
        first_product,
    })
}
