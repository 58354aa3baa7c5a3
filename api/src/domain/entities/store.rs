//! Store domain entity
//!
//! A physical retail branch.

use serde::{Deserialize, Serialize};

/// Unique identifier for a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(pub i64);

impl From<i64> for StoreId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A store branch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Store {
    pub id: Option<StoreId>,
    pub branch_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
}

impl Store {
    pub fn state_contains(&self, needle: &str) -> bool {
        super::contains_ci(self.state.as_deref(), needle)
    }

    pub fn city_contains(&self, needle: &str) -> bool {
        super::contains_ci(self.city.as_deref(), needle)
    }
}

/// Branch name and address, as listed by a branch lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Branch {
    pub branch_name: String,
    pub address: String,
}

impl From<&Store> for Branch {
    fn from(store: &Store) -> Self {
        Self {
            branch_name: store.branch_name.clone().unwrap_or_default(),
            address: store.address.clone().unwrap_or_default(),
        }
    }
}
