use std::net::Ipv4Addr;

/// Label for a network whose hosts are unknown.
pub const UNKNOWN_NETWORK: &str = "Unknown Network";

/// The `/24` block containing `ip`, written as `a.b.c.0/24`.
pub fn class_c_network(ip: Ipv4Addr) -> String {
    let [a, b, c, _] = ip.octets();
    format!("{}/24", Ipv4Addr::new(a, b, c, 0))
}

/// Network label for a report: the `/24` of the first discovered host.
pub fn network_label(first_host: Option<Ipv4Addr>) -> String {
    match first_host {
        Some(ip) => class_c_network(ip),
        None => UNKNOWN_NETWORK.to_string(),
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
