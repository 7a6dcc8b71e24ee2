//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing an address together with its
//! prefix length, along with the mask and address arithmetic used by the
//! calculator. All arithmetic is done on the big-endian `u32` form of the
//! address, so nothing is ever sign-extended.

use itertools::Itertools;
use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        // u64 so that a shift by 32 (len 0) is defined
        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Dotted subnet mask for a prefix length, e.g. 20 -> 255.255.240.0
pub fn subnet_mask(len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    Ok(Ipv4Addr::from(get_cidr_mask(len)?))
}

/// Wildcard mask, each octet is `255 - mask octet`.
pub fn wildcard_mask(len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = subnet_mask(len)?.octets();
    Ok(Ipv4Addr::from(mask.map(|o| 255 - o)))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from((u32::from(addr) & mask) | !mask))
}

/// Move an address by `offset`, carrying across octet boundaries.
///
/// Wraps modulo 2^32, so `0.0.0.0 - 1` is `255.255.255.255`.
pub fn offset_addr(addr: Ipv4Addr, offset: i32) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr).wrapping_add_signed(offset))
}

/// Render an address as dotted 8-bit binary, e.g. `11111111.00000000.00000000.00000000`.
pub fn to_binary(addr: Ipv4Addr) -> String {
    addr.octets().iter().map(|o| format!("{o:08b}")).join(".")
}

/// Total number of addresses in a subnet, `2^(32 - len)`.
pub fn num_hosts(len: u8) -> Result<u64, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Addresses minus network and broadcast. Goes to 0 for /31 and -1 for /32.
pub fn num_usable_hosts(len: u8) -> Result<i64, Box<dyn Error>> {
    Ok(num_hosts(len)? as i64 - 2)
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
