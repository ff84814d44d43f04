//! # Summaries
//!
//! Pure views over a [`ScanSession`]. Every function here only reads the session,
//! so a summary reflects exactly what had been accumulated when it was built.
//!
//! Orderings are numeric: addresses compare octet by octet, ports as integers.

use std::collections::{BTreeMap, HashSet};
use std::net::Ipv4Addr;
use std::time::Duration;

use scanview_common::network::range;
use scanview_common::records::{Endpoint, HostRecord, PortRecord, ServiceRecord};

use crate::session::ScanSession;

/// Ports treated as higher security relevance in the final summary.
pub const RISKY_PORTS: [u16; 9] = [21, 22, 23, 80, 443, 3389, 5900, 8080, 8443];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDiscoverySummary {
    /// Discovered hosts in arrival order.
    pub hosts: Vec<HostRecord>,
    /// Distinct vendors among hosts that reported one.
    pub vendor_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPorts {
    pub ip: Ipv4Addr,
    /// `(port, service)` pairs, ascending by port.
    pub ports: Vec<(u16, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortScanSummary {
    pub open_ports: usize,
    /// One entry per host with at least one open port, ascending by address.
    pub by_host: Vec<HostPorts>,
    pub total_hosts: usize,
}

impl PortScanSummary {
    pub fn hosts_with_ports(&self) -> usize {
        self.by_host.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceGroup {
    pub service: String,
    pub locations: Vec<Endpoint>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSummary {
    pub total: usize,
    pub analyzed: usize,
    pub expected: usize,
    /// Services with a fingerprint, ascending by `(ip, port)`.
    pub fingerprinted: Vec<ServiceRecord>,
    /// Services without a fingerprint grouped by name, groups ascending by name.
    pub standard: Vec<ServiceGroup>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exposure {
    pub hosts_with_ports: usize,
    pub total_hosts: usize,
}

impl Exposure {
    /// Share of discovered hosts with an open port, `0.0` when nothing was discovered.
    pub fn percent(&self) -> f64 {
        if self.total_hosts == 0 {
            return 0.0;
        }
        self.hosts_with_ports as f64 / self.total_hosts as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    pub vendor_count: usize,
    /// Most frequent open-port service and how often it occurs.
    pub top_service: Option<(String, usize)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinalSummary {
    pub elapsed: Duration,
    pub hosts: usize,
    pub open_ports: usize,
    pub services: usize,
    pub exposure: Exposure,
    /// Open ports on [`RISKY_PORTS`], ascending by `(ip, port)`.
    pub risky: Vec<PortRecord>,
    pub fingerprinted: Vec<ServiceRecord>,
    /// Only present when more than one host was discovered.
    pub topology: Option<Topology>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreePort {
    pub port: u16,
    pub protocol: String,
    pub service: String,
    pub fingerprint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeHost {
    pub ip: Ipv4Addr,
    pub vendor: Option<String>,
    /// Ascending by port; empty means no open ports.
    pub ports: Vec<TreePort>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkTree {
    pub network: String,
    pub hosts: Vec<TreeHost>,
}

fn vendor_count(hosts: &[HostRecord]) -> usize {
    hosts
        .iter()
        .filter_map(|host| host.vendor.as_deref())
        .collect::<HashSet<_>>()
        .len()
}

fn fingerprinted(services: &[ServiceRecord]) -> Vec<ServiceRecord> {
    let mut found: Vec<ServiceRecord> = services
        .iter()
        .filter(|service| service.fingerprint.is_some())
        .cloned()
        .collect();
    found.sort_by_key(ServiceRecord::key);
    found
}

/// Most frequent service among open ports. Ties go to the service seen first.
fn top_service(ports: &[PortRecord]) -> Option<(String, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for port in ports {
        match counts.iter_mut().find(|(name, _)| *name == port.service) {
            Some((_, count)) => *count += 1,
            None => counts.push((port.service.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (name, count) in counts {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((name, count));
        }
    }
    best.map(|(name, count)| (name.to_string(), count))
}

pub fn host_discovery(session: &ScanSession) -> HostDiscoverySummary {
    HostDiscoverySummary {
        hosts: session.hosts().to_vec(),
        vendor_count: vendor_count(session.hosts()),
    }
}

pub fn port_scan(session: &ScanSession) -> PortScanSummary {
    let mut grouped: BTreeMap<Ipv4Addr, Vec<(u16, String)>> = BTreeMap::new();
    for port in session.ports() {
        grouped
            .entry(port.ip)
            .or_default()
            .push((port.port, port.service.clone()));
    }

    let by_host = grouped
        .into_iter()
        .map(|(ip, mut ports)| {
            ports.sort_by_key(|(port, _)| *port);
            HostPorts { ip, ports }
        })
        .collect();

    PortScanSummary {
        open_ports: session.ports().len(),
        by_host,
        total_hosts: session.hosts().len(),
    }
}

pub fn service_detection(session: &ScanSession) -> ServiceSummary {
    let mut standard: BTreeMap<&str, Vec<Endpoint>> = BTreeMap::new();
    for service in session.services().iter().filter(|s| s.fingerprint.is_none()) {
        standard
            .entry(service.service.as_str())
            .or_default()
            .push(service.key());
    }

    ServiceSummary {
        total: session.services().len(),
        analyzed: session.services_analyzed(),
        expected: session.services_expected(),
        fingerprinted: fingerprinted(session.services()),
        standard: standard
            .into_iter()
            .map(|(service, mut locations)| {
                locations.sort();
                ServiceGroup {
                    service: service.to_string(),
                    locations,
                }
            })
            .collect(),
    }
}

pub fn exposure(session: &ScanSession) -> Exposure {
    let hosts_with_ports = session
        .ports()
        .iter()
        .map(|port| port.ip)
        .collect::<HashSet<_>>()
        .len();

    Exposure {
        hosts_with_ports,
        total_hosts: session.hosts().len(),
    }
}

pub fn final_summary(session: &ScanSession, elapsed: Duration) -> FinalSummary {
    let mut risky: Vec<PortRecord> = session
        .ports()
        .iter()
        .filter(|port| RISKY_PORTS.contains(&port.port))
        .cloned()
        .collect();
    risky.sort_by_key(PortRecord::key);

    let topology = (session.hosts().len() > 1).then(|| Topology {
        vendor_count: vendor_count(session.hosts()),
        top_service: top_service(session.ports()),
    });

    FinalSummary {
        elapsed,
        hosts: session.hosts().len(),
        open_ports: session.ports().len(),
        services: session.services().len(),
        exposure: exposure(session),
        risky,
        fingerprinted: fingerprinted(session.services()),
        topology,
    }
}

/// Hierarchical view of discovered hosts, their open ports and fingerprints.
///
/// Ports belonging to addresses that never showed up in host discovery are
/// left out of the tree.
pub fn network_tree(session: &ScanSession) -> NetworkTree {
    let network = range::network_label(session.hosts().first().map(|host| host.ip));

    let mut hosts: Vec<TreeHost> = session
        .hosts()
        .iter()
        .map(|host| {
            let mut ports: Vec<TreePort> = session
                .ports()
                .iter()
                .filter(|port| port.ip == host.ip)
                .map(|port| TreePort {
                    port: port.port,
                    protocol: port.protocol.clone(),
                    service: port.service.clone(),
                    fingerprint: session
                        .services()
                        .iter()
                        .find(|service| service.key() == port.key())
                        .and_then(|service| service.fingerprint.clone()),
                })
                .collect();
            ports.sort_by_key(|port| port.port);

            TreeHost {
                ip: host.ip,
                vendor: host.vendor.clone(),
                ports,
            }
        })
        .collect();
    hosts.sort_by_key(|host| host.ip);

    NetworkTree { network, hosts }
}

/// Formats a duration as `MMm SSs`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}m {:02}s", secs / 60, secs % 60)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(last: u8) -> Ipv4Addr {
        Ipv4Addr::new(192, 168, 1, last)
    }

    fn host(last: u8, vendor: Option<&str>) -> HostRecord {
        HostRecord {
            ip: ip(last),
            mac: None,
            vendor: vendor.map(str::to_string),
        }
    }

    fn open(last: u8, port: u16, service: &str) -> PortRecord {
        PortRecord {
            ip: ip(last),
            port,
            protocol: "tcp".to_string(),
            state: "open".to_string(),
            service: service.to_string(),
        }
    }

    fn service(last: u8, port: u16, name: &str, fingerprint: Option<&str>) -> ServiceRecord {
        ServiceRecord {
            ip: ip(last),
            port,
            protocol: "tcp".to_string(),
            state: "open".to_string(),
            service: name.to_string(),
            fingerprint: fingerprint.map(str::to_string),
        }
    }

    fn sample() -> ScanSession {
        let mut session = ScanSession::new();
        session.insert_host(host(20, Some("Acme")));
        session.insert_host(host(3, None));
        session.insert_host(host(100, Some("Acme")));
        session.insert_host(host(9, Some("Globex")));

        session.insert_port(open(20, 8080, "http-proxy"));
        session.insert_port(open(20, 22, "ssh"));
        session.insert_port(open(3, 80, "http"));
        session.insert_port(open(100, 9999, "abyss"));
        session.insert_port(open(3, 8080, "http"));

        session.insert_service(service(20, 22, "ssh", Some("OpenSSH 9.6")));
        session.insert_service(service(3, 80, "http", None));
        session.insert_service(service(3, 8080, "http", None));
        session.insert_service(service(20, 8080, "http-proxy", None));
        session.insert_service(service(3, 443, "https", Some("nginx 1.24")));
        session
    }

    #[test]
    fn test_host_discovery_counts_present_vendors() {
        let summary = host_discovery(&sample());
        assert_eq!(summary.hosts.len(), 4);
        assert_eq!(summary.hosts[0].ip, ip(20));
        assert_eq!(summary.vendor_count, 2);
    }

    #[test]
    fn test_port_scan_groups_numerically() {
        let summary = port_scan(&sample());
        assert_eq!(summary.open_ports, 5);
        assert_eq!(summary.total_hosts, 4);
        assert_eq!(summary.hosts_with_ports(), 3);

        let order: Vec<Ipv4Addr> = summary.by_host.iter().map(|h| h.ip).collect();
        assert_eq!(order, vec![ip(3), ip(20), ip(100)]);

        let ports: Vec<u16> = summary.by_host[1].ports.iter().map(|(p, _)| *p).collect();
        assert_eq!(ports, vec![22, 8080]);
    }

    #[test]
    fn test_service_detection_partition() {
        let summary = service_detection(&sample());
        assert_eq!(summary.total, 5);

        let fingerprinted: Vec<Endpoint> =
            summary.fingerprinted.iter().map(ServiceRecord::key).collect();
        assert_eq!(fingerprinted, vec![(ip(3), 443), (ip(20), 22)]);

        let names: Vec<&str> = summary.standard.iter().map(|g| g.service.as_str()).collect();
        assert_eq!(names, vec!["http", "http-proxy"]);
        assert_eq!(summary.standard[0].locations, vec![(ip(3), 80), (ip(3), 8080)]);
    }

    #[test]
    fn test_exposure_without_hosts_is_zero() {
        let mut session = ScanSession::new();
        assert_eq!(exposure(&session).percent(), 0.0);

        session.insert_port(open(1, 22, "ssh"));
        let exposure = exposure(&session);
        assert_eq!(exposure.hosts_with_ports, 1);
        assert_eq!(exposure.percent(), 0.0);
    }

    #[test]
    fn test_final_summary() {
        let summary = final_summary(&sample(), Duration::from_secs(125));
        assert_eq!(summary.exposure.percent(), 75.0);

        let risky: Vec<Endpoint> = summary.risky.iter().map(PortRecord::key).collect();
        assert_eq!(risky, vec![(ip(3), 80), (ip(3), 8080), (ip(20), 22), (ip(20), 8080)]);

        let topology = summary.topology.unwrap();
        assert_eq!(topology.vendor_count, 2);
        assert_eq!(topology.top_service, Some(("http".to_string(), 2)));
    }

    #[test]
    fn test_top_service_tie_goes_to_first_seen() {
        let ports = vec![
            open(1, 22, "ssh"),
            open(1, 80, "http"),
            open(2, 80, "http"),
            open(2, 22, "ssh"),
        ];
        assert_eq!(top_service(&ports), Some(("ssh".to_string(), 2)));
        assert_eq!(top_service(&[]), None);
    }

    #[test]
    fn test_topology_needs_two_hosts() {
        let mut session = ScanSession::new();
        session.insert_host(host(1, Some("Acme")));
        assert!(final_summary(&session, Duration::ZERO).topology.is_none());
    }

    #[test]
    fn test_network_tree() {
        let tree = network_tree(&sample());
        assert_eq!(tree.network, "192.168.1.0/24");

        let order: Vec<Ipv4Addr> = tree.hosts.iter().map(|h| h.ip).collect();
        assert_eq!(order, vec![ip(3), ip(9), ip(20), ip(100)]);
        assert!(tree.hosts[1].ports.is_empty());

        let host = &tree.hosts[2];
        assert_eq!(host.ports[0].port, 22);
        assert_eq!(host.ports[0].fingerprint.as_deref(), Some("OpenSSH 9.6"));
        assert_eq!(host.ports[1].fingerprint, None);
    }

    #[test]
    fn test_network_tree_without_hosts() {
        let tree = network_tree(&ScanSession::new());
        assert_eq!(tree.network, range::UNKNOWN_NETWORK);
        assert!(tree.hosts.is_empty());
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "00m 00s");
        assert_eq!(format_elapsed(Duration::from_millis(125_900)), "02m 05s");
    }
}
