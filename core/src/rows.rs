//! # Row Parsers
//!
//! Fixed-shape data rows for each phase, one whitespace separated record per line:
//!
//! * host discovery: `<ip> <mac|None> <vendor text>`
//! * port scanning: `<ip> <port> <proto> <state> <reason> <service>`
//! * service detection: `<ip> <port> <proto> <state> <service> [fingerprint text]`
//!
//! Each parser returns `Ok(None)` when the line does not have the shape at all and
//! `Err` when the shape matches but a field is unusable (e.g. port `70000`).

use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::Regex;
use scanview_common::network::mac;
use scanview_common::records::{HostRecord, PortRecord, ServiceRecord};

use crate::classifier::IPV4;
use crate::error::RowError;

static HOST_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{IPV4}\s+([A-Fa-f0-9:]{{17}}|None)\s+(.*)$"))
        .expect("host row pattern is valid")
});

static PORT_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{IPV4}\s+(\d+)\s+(\w+)\s+(\w+)\s+[\w\-]+\s+([\w\-]+)$"
    ))
    .expect("port row pattern is valid")
});

static SERVICE_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{IPV4}\s+(\d+)\s+(\w+)\s+(\w+)\s+([\w\-]+)\s*(.*?)$"
    ))
    .expect("service row pattern is valid")
});

fn parse_ip(raw: &str) -> Result<Ipv4Addr, RowError> {
    raw.parse()
        .map_err(|_| RowError::InvalidAddress(raw.to_string()))
}

fn parse_port(raw: &str) -> Result<u16, RowError> {
    raw.parse()
        .map_err(|_| RowError::InvalidPort(raw.to_string()))
}

/// Parses a host discovery row.
pub fn parse_host_row(line: &str) -> Result<Option<HostRecord>, RowError> {
    let Some(caps) = HOST_ROW.captures(line.trim()) else {
        return Ok(None);
    };

    Ok(Some(HostRecord {
        ip: parse_ip(&caps[1])?,
        mac: mac::normalize_mac(&caps[2]),
        vendor: mac::normalize_text(&caps[3]),
    }))
}

/// Parses a port scanning row, whatever the port state.
///
/// Filtering on `open` is left to the caller so closed ports are still observed.
pub fn parse_port_row(line: &str) -> Result<Option<PortRecord>, RowError> {
    let Some(caps) = PORT_ROW.captures(line.trim()) else {
        return Ok(None);
    };

    Ok(Some(PortRecord {
        ip: parse_ip(&caps[1])?,
        port: parse_port(&caps[2])?,
        protocol: caps[3].to_string(),
        state: caps[4].to_string(),
        service: caps[5].to_string(),
    }))
}

/// Parses a service detection row.
pub fn parse_service_row(line: &str) -> Result<Option<ServiceRecord>, RowError> {
    let Some(caps) = SERVICE_ROW.captures(line.trim()) else {
        return Ok(None);
    };

    Ok(Some(ServiceRecord {
        ip: parse_ip(&caps[1])?,
        port: parse_port(&caps[2])?,
        protocol: caps[3].to_string(),
        state: caps[4].to_string(),
        service: caps[5].to_string(),
        fingerprint: mac::normalize_text(&caps[6]),
    }))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
