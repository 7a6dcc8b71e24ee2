//! Subnet calculation logic.
//!
//! - [`validate`] - parsing and range checks on the raw input
//! - [`calculate`] - the derivation pipeline

mod calculate;
mod validate;

// Re-export public functions
pub use calculate::{calculate, calculate_with};
pub use validate::{parse_address, parse_prefix, validate, InputError};
