//! Input validation.
//!
//! Every parse is explicit and fails closed: whitespace, signs, empty parts and
//! out-of-range values are rejected instead of being coerced.

use crate::models::MAX_LENGTH;
use std::fmt;
use std::net::Ipv4Addr;

/// The one failure a calculation can report.
///
/// Callers see a single "invalid input" kind; the variant only records which
/// half of the input was at fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    InvalidAddress(String),
    InvalidPrefix(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidAddress(a) => {
                write!(f, "Invalid IPv4 address or prefix length: address '{a}'")
            }
            InputError::InvalidPrefix(p) => {
                write!(f, "Invalid IPv4 address or prefix length: prefix '{p}'")
            }
        }
    }
}

impl std::error::Error for InputError {}

fn parse_decimal(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // leading zeros are allowed, "0000000001" is 1
    s.parse::<u32>().ok()
}

/// Parse a dotted-decimal address, exactly four parts each in 0..=255.
pub fn parse_address(address: &str) -> Result<Ipv4Addr, InputError> {
    let err = || InputError::InvalidAddress(address.to_string());
    let parts: Vec<&str> = address.split('.').collect();
    if parts.len() != 4 {
        return Err(err());
    }
    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        *octet = parse_decimal(part)
            .and_then(|n| u8::try_from(n).ok())
            .ok_or_else(err)?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Parse a prefix length in 0..=32.
pub fn parse_prefix(prefix: &str) -> Result<u8, InputError> {
    parse_decimal(prefix)
        .filter(|n| *n <= MAX_LENGTH as u32)
        .map(|n| n as u8)
        .ok_or_else(|| InputError::InvalidPrefix(prefix.to_string()))
}

/// Validate both halves of the input, address first.
pub fn validate(address: &str, prefix: &str) -> Result<(Ipv4Addr, u8), InputError> {
    let addr = parse_address(address)?;
    let len = parse_prefix(prefix)?;
    Ok((addr, len))
}
