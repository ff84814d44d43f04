use std::net::Ipv4Addr;

use crate::terminal::colors;
use colored::*;
use scanview_common::records::Endpoint;

pub fn ip(ip: &Ipv4Addr) -> ColoredString {
    ip.to_string().color(colors::IPV4_ADDR)
}

pub fn endpoint((addr, port): &Endpoint) -> String {
    format!("{}:{}", ip(addr), port)
}

/// ` [Vendor]` suffix, empty when the vendor is unknown.
pub fn vendor_suffix(vendor: Option<&str>) -> String {
    match vendor {
        Some(vendor) => format!(" [{}]", vendor.color(colors::VENDOR)),
        None => String::new(),
    }
}

/// `22/ssh, 80/http`
pub fn port_list(ports: &[(u16, String)]) -> String {
    ports
        .iter()
        .map(|(port, service)| format!("{port}/{service}"))
        .collect::<Vec<String>>()
        .join(", ")
}

pub fn endpoint_list(endpoints: &[Endpoint]) -> String {
    endpoints
        .iter()
        .map(endpoint)
        .collect::<Vec<String>>()
        .join(", ")
}

/// `66.7% (2/3 hosts)`
pub fn exposure(percent: f64, with_ports: usize, total: usize) -> String {
    format!("{percent:.1}% ({with_ports}/{total} hosts)")
}

pub fn plural(count: usize, one: &str, many: &str) -> String {
    let unit = if count == 1 { one } else { many };
    format!("{count} {unit}")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
