//! Terminal output of a calculation.
//!
//! One labelled line per field, labels coloured, values aligned.

use crate::models::SubnetResult;
use colored::Colorize;

const LABEL_WIDTH: usize = 16;

/// Format a value as a left-aligned field padded to `width`.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:<width$}")
    }
}

/// Label/value pairs in display order.
pub fn result_lines(r: &SubnetResult) -> Vec<(&'static str, String)> {
    vec![
        // canonical form, "010.1.1.1" prints as 10.1.1.1
        ("Address:", r.cidr().to_string()),
        (
            "Netmask:",
            format!("{} = {}", r.subnet_mask, r.prefix_length),
        ),
        ("Binary Netmask:", r.binary_netmask.clone()),
        ("Wildcard:", r.wildcard_mask.to_string()),
        ("Network:", r.network_address.to_string()),
        ("Broadcast:", r.broadcast_address.to_string()),
        ("HostMin:", r.host_min.to_string()),
        ("HostMax:", r.host_max.to_string()),
        ("Hosts/Net:", r.usable_hosts.to_string()),
    ]
}

/// Render the result as text, one line per field.
pub fn render_text(r: &SubnetResult, color: bool) -> String {
    result_lines(r)
        .into_iter()
        .map(|(label, value)| {
            let label = format_field(label, LABEL_WIDTH);
            if color {
                format!("{}{value}\n", label.bold().cyan())
            } else {
                format!("{label}{value}\n")
            }
        })
        .collect()
}

/// Print a failed calculation to stderr, no partial fields.
pub fn print_error(message: &str) {
    eprintln!("{}", message.red());
}
