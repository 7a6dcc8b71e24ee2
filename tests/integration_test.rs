//! Integration tests for ipv4-subnet-calc
//!
//! These tests go through the public API, from raw input to rendered output.

use ipv4_subnet_calc::cli::{run, split_cidr, Outcome};
use ipv4_subnet_calc::models::get_cidr_mask;
use ipv4_subnet_calc::{calculate, calculate_with, CalcConfig, HostRangePolicy, OutputFormat};

#[test]
fn test_full_workflow_text() {
    let (addr, prefix) = split_cidr("192.168.1.10/24").expect("Failed to split input");
    let r = calculate(addr, prefix).expect("Failed to calculate");

    assert_eq!(r.cidr().to_string(), "192.168.1.10/24");
    assert_eq!(r.subnet_mask.to_string(), "255.255.255.0");
    assert_eq!(r.host_min.to_string(), "192.168.1.1");
    assert_eq!(r.host_max.to_string(), "192.168.1.254");

    let out = run("192.168.1.10/24", &CalcConfig::default(), false).expect("run failed");
    match out {
        Outcome::Rendered(text) => {
            assert_eq!(text.lines().count(), 9);
            assert!(text.starts_with("Address:        192.168.1.10/24\n"));
            assert!(text.ends_with("Hosts/Net:      254\n"));
        }
        Outcome::Invalid(msg) => panic!("Unexpected failure: {msg}"),
    }
}

#[test]
fn test_full_workflow_json() {
    let config = CalcConfig {
        output: OutputFormat::Json,
        ..Default::default()
    };
    let out = run("1.1.1.1/0", &config, false).expect("run failed");
    let Outcome::Rendered(json) = out else {
        panic!("Expected rendered output");
    };
    let value: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");
    assert_eq!(value["network_address"], "0.0.0.0");
    assert_eq!(value["broadcast_address"], "255.255.255.255");
    assert_eq!(value["total_hosts"], 4294967296u64);
}

#[test]
fn test_invalid_input_has_no_result() {
    let cases = [
        ("300.1.1.1", "24"),
        ("10.0.0.1", "33"),
        ("1.2.3", "24"),
        ("10.0.0.1", "-1"),
    ];
    for (addr, prefix) in cases {
        assert!(calculate(addr, prefix).is_err(), "{addr}/{prefix}");
    }
    // a bad calculation does not affect the next one
    assert!(calculate("10.0.0.1", "8").is_ok());
}

#[test]
fn test_policies_agree_below_31() {
    let rfc = CalcConfig {
        host_range: HostRangePolicy::Rfc3021,
        ..Default::default()
    };
    for len in 0..=30u8 {
        let prefix = len.to_string();
        assert_eq!(
            calculate("203.0.113.77", &prefix).unwrap(),
            calculate_with("203.0.113.77", &prefix, &rfc).unwrap()
        );
    }
}

#[test]
fn test_host_range_inside_subnet() {
    for len in 0..=30u8 {
        let r = calculate("198.51.100.200", &len.to_string()).unwrap();
        let mask = get_cidr_mask(len).unwrap();
        assert_eq!(u32::from(r.host_min) & mask, u32::from(r.network_address));
        assert_eq!(u32::from(r.host_max) & mask, u32::from(r.network_address));
        assert_eq!(
            u32::from(r.host_max) - u32::from(r.host_min) + 1,
            r.usable_hosts as u32
        );
    }
}
