//! Mock implementations of port traits
//!
//! In-memory dataset source that hands back canned tables and records which
//! datasets were requested.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::Table;
use crate::domain::ports::{DatasetLoad, DatasetSource, LoadStatus};

#[derive(Default)]
pub struct InMemoryDatasetSource {
    datasets: HashMap<String, DatasetLoad>,
    requested: Arc<RwLock<Vec<String>>>,
}

impl InMemoryDatasetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `table` for `dataset` as if read from `<dataset>.csv`
    pub fn with_table(mut self, dataset: &str, table: Table) -> Self {
        let path = format!("{}.csv", dataset);
        let status = if table.is_empty() {
            LoadStatus::Empty { path }
        } else {
            LoadStatus::Loaded {
                path,
                rows: table.len(),
                columns: table.columns.clone(),
            }
        };
        self.datasets
            .insert(dataset.to_string(), DatasetLoad { table, status });
        self
    }

    /// Report `dataset` as present but unreadable
    pub fn with_failure(mut self, dataset: &str, error: &str) -> Self {
        self.datasets.insert(
            dataset.to_string(),
            DatasetLoad {
                table: Table::default(),
                status: LoadStatus::Failed {
                    path: format!("{}.xlsx", dataset),
                    error: error.to_string(),
                },
            },
        );
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.read().unwrap().clone()
    }
}

impl DatasetSource for InMemoryDatasetSource {
    fn load(&self, dataset: &str) -> DatasetLoad {
        self.requested.write().unwrap().push(dataset.to_string());
        self.datasets
            .get(dataset)
            .cloned()
            .unwrap_or_else(DatasetLoad::missing)
    }
}
