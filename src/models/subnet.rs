//! Subnet calculation result.

use super::Ipv4;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything derived from one address and prefix length.
///
/// Built once by [`crate::calculate`], never mutated. Addresses serialize as
/// dotted-decimal strings, host counts as integers.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetResult {
    /// The address as entered (not masked).
    pub address: Ipv4Addr,
    /// CIDR prefix length (0-32).
    pub prefix_length: u8,
    pub subnet_mask: Ipv4Addr,
    /// Subnet mask as dotted 8-bit binary.
    pub binary_netmask: String,
    pub wildcard_mask: Ipv4Addr,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    /// First usable host.
    pub host_min: Ipv4Addr,
    /// Last usable host.
    pub host_max: Ipv4Addr,
    /// `2^(32 - prefix_length)`
    pub total_hosts: u64,
    /// Negative for /32 under the carry policy.
    pub usable_hosts: i64,
}

impl SubnetResult {
    /// The address in `a.b.c.d/p` notation.
    pub fn cidr(&self) -> Ipv4 {
        Ipv4 {
            addr: self.address,
            mask: self.prefix_length,
        }
    }
}
