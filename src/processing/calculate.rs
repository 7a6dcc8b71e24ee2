//! The subnet calculation pipeline.
//!
//! validate -> mask -> network -> broadcast -> host range / wildcard -> result

use super::validate::{validate, InputError};
use crate::config::{CalcConfig, HostRangePolicy};
use crate::models::{
    broadcast_addr, cut_addr, num_hosts, num_usable_hosts, offset_addr, subnet_mask, to_binary,
    wildcard_mask, SubnetResult,
};
use std::error::Error;
use std::net::Ipv4Addr;

/// Calculate subnet properties with the default (carry) host range policy.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::calculate;
/// let r = calculate("192.168.1.10", "24").unwrap();
/// assert_eq!(r.network_address.to_string(), "192.168.1.0");
/// assert_eq!(r.usable_hosts, 254);
/// ```
pub fn calculate(address: &str, prefix: &str) -> Result<SubnetResult, InputError> {
    calculate_with(address, prefix, &CalcConfig::default())
}

/// Calculate subnet properties using the host range policy from `config`.
///
/// Nothing is derived until both inputs are valid.
pub fn calculate_with(
    address: &str,
    prefix: &str,
    config: &CalcConfig,
) -> Result<SubnetResult, InputError> {
    let (addr, len) = validate(address, prefix).inspect_err(|e| log::debug!("{e}"))?;
    // A validated prefix is always <= 32, which is all derive() can fail on.
    derive(addr, len, config.host_range).map_err(|e| {
        log::error!("derive failed for validated input {addr}/{len}: {e}");
        InputError::InvalidPrefix(prefix.to_string())
    })
}

fn derive(
    addr: Ipv4Addr,
    len: u8,
    policy: HostRangePolicy,
) -> Result<SubnetResult, Box<dyn Error>> {
    let mask = subnet_mask(len)?;
    let network = cut_addr(addr, len)?;
    let broadcast = broadcast_addr(network, len)?;
    let total_hosts = num_hosts(len)?;

    let (host_min, host_max, usable_hosts) = match (policy, len) {
        (HostRangePolicy::Rfc3021, 31) => (network, broadcast, 2),
        (HostRangePolicy::Rfc3021, 32) => (network, network, 1),
        _ => (
            offset_addr(network, 1),
            offset_addr(broadcast, -1),
            num_usable_hosts(len)?,
        ),
    };

    let result = SubnetResult {
        address: addr,
        prefix_length: len,
        subnet_mask: mask,
        binary_netmask: to_binary(mask),
        wildcard_mask: wildcard_mask(len)?,
        network_address: network,
        broadcast_address: broadcast,
        host_min,
        host_max,
        total_hosts,
        usable_hosts,
    };
    log::debug!("calculated {}: {result:?}", result.cidr());
    Ok(result)
}
