//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod dataset_source;

pub use dataset_source::{DatasetLoad, DatasetSource, LoadStatus};
