//! JSON output of a calculation.

use crate::models::SubnetResult;
use std::error::Error;

/// Pretty-printed JSON for a result.
pub fn to_json(r: &SubnetResult) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(r).map_err(|e| format!("Error serializing JSON: {e}").into())
}
