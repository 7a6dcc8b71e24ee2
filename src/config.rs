//! Runtime configuration.
//!
//! Read from the environment (after `dotenv` has loaded any `.env` file):
//! - `SUBNET_CALC_HOST_RANGE` - `carry` (default) or `rfc3021`
//! - `SUBNET_CALC_OUTPUT` - `text` (default) or `json`

use clap::ValueEnum;
use std::error::Error;
use std::str::FromStr;

pub const ENV_HOST_RANGE: &str = "SUBNET_CALC_HOST_RANGE";
pub const ENV_OUTPUT: &str = "SUBNET_CALC_OUTPUT";

/// How HostMin/HostMax and usable hosts are derived for /31 and /32.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum HostRangePolicy {
    /// Always network+1 .. broadcast-1, carrying into neighbouring subnets.
    #[default]
    Carry,
    /// /31 is a point-to-point link with 2 hosts, /32 a single host.
    #[value(name = "rfc3021")]
    Rfc3021,
}

impl FromStr for HostRangePolicy {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "carry" => Ok(HostRangePolicy::Carry),
            "rfc3021" => Ok(HostRangePolicy::Rfc3021),
            other => {
                Err(format!("Unknown host range policy '{other}', expected carry|rfc3021").into())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => {
                Err(format!("Unknown output format '{other}', expected text|json").into())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalcConfig {
    pub host_range: HostRangePolicy,
    pub output: OutputFormat,
}

impl CalcConfig {
    /// Build config from the process environment.
    pub fn from_env() -> Result<CalcConfig, Box<dyn Error>> {
        CalcConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup, unset keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<CalcConfig, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CalcConfig::default();
        if let Some(v) = lookup(ENV_HOST_RANGE) {
            config.host_range = v.parse()?;
        }
        if let Some(v) = lookup(ENV_OUTPUT) {
            config.output = v.parse()?;
        }
        log::debug!("config: {config:?}");
        Ok(config)
    }
}
