//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The dataset source is mocked by hand rather than with a mocking crate: the
//! port has a single synchronous method and the mock only needs to hand back
//! canned tables and record which datasets were asked for.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
