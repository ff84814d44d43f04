//! # Scan Phases
//!
//! A scan log moves through four stages, each announced by a literal marker line
//! written by the launcher. The markers are a fixed protocol and are matched as
//! plain substrings.

use std::fmt;

/// The stage a scan log is currently in.
///
/// Variants are ordered, so "has the scan reached port scanning" reads as
/// `phase >= Phase::PortScanning`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Nothing but preamble has been read so far.
    #[default]
    Starting,
    HostDiscovery,
    PortScanning,
    ServiceDetection,
    /// Terminal state, no further transitions.
    Complete,
}

impl Phase {
    /// Phases that have a marker, in the order they are matched against a line.
    pub const MARKED: [Phase; 4] = [
        Phase::HostDiscovery,
        Phase::PortScanning,
        Phase::ServiceDetection,
        Phase::Complete,
    ];

    /// The substring that announces this phase in the launcher output.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Phase::Starting => None,
            Phase::HostDiscovery => Some("=== HOST DISCOVERY ==="),
            Phase::PortScanning => Some("=== PORT SCANNING ==="),
            Phase::ServiceDetection => Some("=== SERVICE DETECTION ==="),
            Phase::Complete => Some("Scan complete!"),
        }
    }

    /// Human readable title used for phase headers.
    pub fn title(self) -> &'static str {
        match self {
            Phase::Starting => "STARTING",
            Phase::HostDiscovery => "HOST DISCOVERY",
            Phase::PortScanning => "PORT SCANNING",
            Phase::ServiceDetection => "SERVICE DETECTION",
            Phase::Complete => "COMPLETE",
        }
    }

    /// Finds the first phase whose marker occurs in `line`.
    pub fn from_marker_line(line: &str) -> Option<Phase> {
        Phase::MARKED
            .into_iter()
            .find(|phase| phase.marker().is_some_and(|marker| line.contains(marker)))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
