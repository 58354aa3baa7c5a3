//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Typed records and raw tables
//! - `ports`: Trait definitions for external dependencies
//! - `schema`: Logical field to source column mapping
//! - `data_store`: The immutable per-session data store

pub mod data_store;
pub mod entities;
pub mod ports;
pub mod schema;

pub use data_store::{DataStore, StoreCounts};
pub use schema::ColumnMapping;
