//! Customer domain entity

use serde::{Deserialize, Serialize};

/// Unique identifier for a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub i64);

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered customer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub id: Option<CustomerId>,
    pub name: Option<String>,
    pub loyalty_points: Option<i64>,
    /// Date of the most recent order, as text from the source
    pub last_order_date: Option<String>,
}

impl Customer {
    pub fn name_contains(&self, needle: &str) -> bool {
        super::contains_ci(self.name.as_deref(), needle)
    }
}
