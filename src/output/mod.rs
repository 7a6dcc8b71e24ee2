//! Output formatting for calculation results.
//!
//! - [`terminal`] - labelled text output with colours
//! - [`json`] - JSON output

mod json;
mod terminal;

pub use json::to_json;
pub use terminal::{format_field, print_error, render_text};
