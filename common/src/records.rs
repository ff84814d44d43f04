//! # Scan Records
//!
//! The three kinds of results rebuilt from a scan log. Each record is created once
//! from the first line that describes it and is never modified afterwards.
//!
//! Optional columns (`mac`, `vendor`, `fingerprint`) use `None` as the absent
//! marker, whether the log left the column blank or wrote a literal `None`.

use std::net::Ipv4Addr;

/// A live host found during host discovery. Unique by `ip`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRecord {
    pub ip: Ipv4Addr,
    pub mac: Option<String>,
    pub vendor: Option<String>,
}

/// An open port found during port scanning. Unique by `(ip, port)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRecord {
    pub ip: Ipv4Addr,
    pub port: u16,
    pub protocol: String,
    pub state: String,
    pub service: String,
}

/// A service identified during service detection. Unique by `(ip, port)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub ip: Ipv4Addr,
    pub port: u16,
    pub protocol: String,
    pub state: String,
    pub service: String,
    /// Product, version and extra info as reported by the scanner.
    pub fingerprint: Option<String>,
}

/// Address and port identifying a port or service record.
pub type Endpoint = (Ipv4Addr, u16);

impl HostRecord {
    pub fn key(&self) -> Ipv4Addr {
        self.ip
    }
}

impl PortRecord {
    pub fn key(&self) -> Endpoint {
        (self.ip, self.port)
    }

    pub fn is_open(&self) -> bool {
        self.state == "open"
    }
}

impl ServiceRecord {
    pub fn key(&self) -> Endpoint {
        (self.ip, self.port)
    }
}
