//! Order domain entity
//!
//! Orders reference customers and products by id. Referential integrity is
//! not enforced: a dangling reference simply never matches.

use serde::{Deserialize, Serialize};

use super::{CustomerId, ProductId};

/// Unique identifier for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub i64);

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: Option<OrderId>,
    pub customer_id: Option<CustomerId>,
    pub product_id: Option<ProductId>,
    pub status: Option<String>,
}
