//! # Line Classifier
//!
//! Decides what a single log line is before anything acts on it.
//!
//! Rules are tried in a fixed order and the first one that produces a [`Line`]
//! wins:
//!
//! | order | rule | example |
//! |-------|------|---------|
//! | 1 | phase markers | `=== PORT SCANNING ===`, `Scan complete!` |
//! | 2 | host announcement | `Scanning 192.168.1.10` |
//! | 3 | port announcement | `Port 192.168.1.10:22` |
//! | 4 | service count | `Performing service detection on 3 open ports` |
//!
//! None of these depend on the current phase. A line no rule claims is a
//! [`Line::Row`], left for the phase-specific parsers in [`crate::rows`].
//! An announcement whose captured address or port does not parse is not
//! claimed by its rule and falls through to the next one.

use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use scanview_common::phase::Phase;

/// Dotted-quad capture shared by the announcement patterns.
pub(crate) const IPV4: &str = r"([0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})";

/// The shape of one log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// Empty or whitespace only.
    Blank,
    /// A phase boundary.
    Marker(Phase),
    /// A new host is being probed.
    ScanningHost(Ipv4Addr),
    /// Service analysis starts on a port.
    AnalyzingPort { ip: Ipv4Addr, port: u16 },
    /// How many open ports service detection will look at.
    ServiceCount(usize),
    /// Anything else; possibly a data row for the current phase.
    Row,
}

#[derive(Debug, Clone, Copy)]
enum Action {
    ScanningHost,
    AnalyzingPort,
    ServiceCount,
}

impl Action {
    fn build(self, caps: &Captures<'_>) -> Option<Line> {
        match self {
            Action::ScanningHost => caps[1].parse().ok().map(Line::ScanningHost),
            Action::AnalyzingPort => {
                let ip = caps[1].parse().ok()?;
                let port = caps[2].parse().ok()?;
                Some(Line::AnalyzingPort { ip, port })
            }
            Action::ServiceCount => caps[1].parse().ok().map(Line::ServiceCount),
        }
    }
}

struct Rule {
    action: Action,
    pattern: Regex,
}

impl Rule {
    fn new(action: Action, pattern: &str) -> Self {
        let pattern = Regex::new(pattern).expect("classifier patterns are valid");
        Self { action, pattern }
    }
}

/// Announcement rules 2 to 4. Markers are plain substrings and are checked first.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(Action::ScanningHost, &format!("Scanning {IPV4}")),
        Rule::new(Action::AnalyzingPort, &format!(r"Port {IPV4}:(\d+)")),
        Rule::new(
            Action::ServiceCount,
            r"Performing service detection on (\d+) open ports?",
        ),
    ]
});

/// Classifies lines against the ordered rule table.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineClassifier;

impl LineClassifier {
    pub fn new() -> Self {
        LazyLock::force(&RULES);
        Self
    }

    pub fn classify(&self, line: &str) -> Line {
        if line.trim().is_empty() {
            return Line::Blank;
        }
        if let Some(phase) = Phase::from_marker_line(line) {
            return Line::Marker(phase);
        }

        RULES
            .iter()
            .find_map(|rule| {
                let caps = rule.pattern.captures(line)?;
                rule.action.build(&caps)
            })
            .unwrap_or(Line::Row)
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
