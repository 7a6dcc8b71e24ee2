//! Command line handling for the `ipv4calc` binary.
//!
//! Splits the combined `address/prefix` notation and hands the halves to the
//! calculator. Flags override values from the environment.

use crate::config::{CalcConfig, HostRangePolicy, OutputFormat};
use crate::output;
use crate::processing::{calculate_with, InputError};
use clap::Parser;
use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;

#[derive(Parser, Debug)]
#[command(
    name = "ipv4calc",
    about = "IPv4 subnet calculator: netmask, wildcard, network, broadcast and host range",
    version
)]
pub struct Cli {
    /// Address and prefix length, e.g. 192.168.1.10/24
    pub cidr: String,
    /// Output format, overrides SUBNET_CALC_OUTPUT
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
    /// Host range policy for /31 and /32, overrides SUBNET_CALC_HOST_RANGE
    #[arg(long, value_enum, value_name = "POLICY")]
    pub host_range: Option<HostRangePolicy>,
}

lazy_static! {
    static ref RE_CIDR: Regex = Regex::new(r"^([^/]*)/(.*)$").expect("Invalid Regex?");
}

/// Split `a.b.c.d/p` on the first '/' after trimming the outer whitespace.
pub fn split_cidr(input: &str) -> Result<(&str, &str), InputError> {
    let input = input.trim();
    let caps = RE_CIDR
        .captures(input)
        .ok_or_else(|| InputError::InvalidPrefix(String::new()))?;
    match (caps.get(1), caps.get(2)) {
        (Some(addr), Some(prefix)) => Ok((addr.as_str(), prefix.as_str())),
        _ => Err(InputError::InvalidPrefix(String::new())),
    }
}

/// Merge command line flags over the environment config.
pub fn resolve_config(cli: &Cli, mut config: CalcConfig) -> CalcConfig {
    if let Some(policy) = cli.host_range {
        config.host_range = policy;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    config
}

/// What `run` produced: the rendered output or the single failure message.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Rendered(String),
    Invalid(String),
}

/// Calculate and render one `address/prefix` input.
///
/// `color` only affects text output.
pub fn run(input: &str, config: &CalcConfig, color: bool) -> Result<Outcome, Box<dyn Error>> {
    log::info!("calculating {input:?} with {config:?}");
    let result =
        split_cidr(input).and_then(|(addr, prefix)| calculate_with(addr, prefix, config));
    let result = match result {
        Ok(r) => r,
        Err(e) => {
            log::info!("{e}");
            return Ok(Outcome::Invalid(
                "Invalid IPv4 address or prefix length.".to_string(),
            ));
        }
    };
    let rendered = match config.output {
        OutputFormat::Text => output::render_text(&result, color),
        OutputFormat::Json => output::to_json(&result)?,
    };
    Ok(Outcome::Rendered(rendered))
}
