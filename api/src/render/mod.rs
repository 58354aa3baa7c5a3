//! Render module
//!
//! Plain-text rendering of assistant responses and load reports, shared by
//! the terminal and the HTTP text responses.

pub mod renderer;

pub use renderer::{render_export_summary, render_load_report, render_response};
