//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures and arithmetic:
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`SubnetResult`] - the record produced by one calculation

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, num_hosts, num_usable_hosts, offset_addr,
    subnet_mask, to_binary, wildcard_mask, Ipv4, MAX_LENGTH,
};
pub use subnet::SubnetResult;
