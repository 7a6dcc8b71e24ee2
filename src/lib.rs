//! IPv4 subnet calculator.
//!
//! Given a dotted-decimal address and a CIDR prefix length, derives the subnet
//! mask, wildcard, network and broadcast addresses, host range and host counts.
//!
//! ```
//! let r = ipv4_subnet_calc::calculate("172.16.5.200", "30").unwrap();
//! assert_eq!(r.broadcast_address.to_string(), "172.16.5.203");
//! ```

pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

pub use config::{CalcConfig, HostRangePolicy, OutputFormat};
pub use models::SubnetResult;
pub use processing::{calculate, calculate_with, InputError};
