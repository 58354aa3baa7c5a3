//! Domain entities
//!
//! Typed records for the four retail tables, plus the raw cell/table types
//! they are built from.

pub mod customer;
pub mod order;
pub mod product;
pub mod record;
pub mod store;

pub use customer::{Customer, CustomerId};
pub use order::{Order, OrderId};
pub use product::{Product, ProductId, StockLevel};
pub use record::{CellValue, DatasetKind, DatasetTables, Row, Table, ISO_TIMESTAMP};
pub use store::{Branch, Store, StoreId};

/// Case-insensitive substring containment on an optional field.
/// A missing field never matches.
pub fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
}
