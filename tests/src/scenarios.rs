#![cfg(test)]
use std::net::Ipv4Addr;

use scanview_common::phase::Phase;
use scanview_core::{Interpreter, Interruption, ReportEvent};

use crate::support::{
    count, events, final_summary, network_tree, port_scan_summary, position, run,
};

const ROUTER: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 1);

const SCENARIO_A: &[&str] = &[
    "=== HOST DISCOVERY ===",
    "192.168.1.1  AA:BB:CC:DD:EE:FF  Acme Corp",
    "=== PORT SCANNING ===",
    "192.168.1.1 22 tcp open ssh-reason ssh",
    "=== SERVICE DETECTION ===",
    "192.168.1.1 22 tcp open ssh OpenSSH_8.9",
    "Scan complete!",
];

#[test]
fn complete_scan_reports_single_host_end_to_end() {
    let interpreter = run(SCENARIO_A);
    let session = interpreter.session();

    assert_eq!(session.phase(), Phase::Complete);
    assert_eq!(session.hosts().len(), 1);
    assert_eq!(session.hosts()[0].ip, ROUTER);
    assert_eq!(session.hosts()[0].vendor.as_deref(), Some("Acme Corp"));

    let summary = final_summary(&interpreter);
    assert_eq!(summary.hosts, 1);
    assert_eq!(summary.open_ports, 1);
    assert_eq!(summary.services, 1);
    assert_eq!(summary.exposure.hosts_with_ports, 1);
    assert_eq!(summary.exposure.total_hosts, 1);
    assert_eq!(summary.exposure.percent(), 100.0);
    assert_eq!(summary.risky.len(), 1);
    assert_eq!(summary.risky[0].port, 22);
    assert_eq!(summary.risky[0].service, "ssh");
    assert_eq!(summary.fingerprinted.len(), 1);
    assert_eq!(
        summary.fingerprinted[0].fingerprint.as_deref(),
        Some("OpenSSH_8.9")
    );
    assert!(summary.topology.is_none());

    assert!(
        !events(&interpreter)
            .iter()
            .any(|event| matches!(event, ReportEvent::Interrupted(_)))
    );
}

#[test]
fn final_summary_is_the_last_block() {
    let interpreter = run(SCENARIO_A);

    let hosts_done = position(&interpreter, |e| {
        matches!(e, ReportEvent::HostDiscoveryComplete(_))
    });
    let ports_header = position(&interpreter, |e| {
        *e == ReportEvent::PhaseHeader(Phase::PortScanning)
    });
    let ports_done = position(&interpreter, |e| {
        matches!(e, ReportEvent::PortScanComplete(_))
    });
    let services_header = position(&interpreter, |e| {
        *e == ReportEvent::PhaseHeader(Phase::ServiceDetection)
    });
    let services_done = position(&interpreter, |e| {
        matches!(e, ReportEvent::ServiceDetectionComplete(_))
    });
    let final_block = position(&interpreter, |e| {
        matches!(e, ReportEvent::FinalSummary(_))
    });

    assert!(hosts_done < ports_header);
    assert!(ports_header < ports_done);
    assert!(ports_done < services_header);
    assert!(services_header < services_done);
    assert!(services_done < final_block);

    let trailing: Vec<&ReportEvent> = events(&interpreter)[final_block + 1..].iter().collect();
    assert_eq!(trailing.len(), 2);
    assert!(matches!(trailing[0], ReportEvent::NetworkTree(_)));
    assert!(matches!(trailing[1], ReportEvent::ReportClosed { .. }));
}

#[test]
fn log_ending_after_port_marker_is_closed_as_interrupted() {
    let interpreter = run(&[
        "=== HOST DISCOVERY ===",
        "192.168.1.1 AA:BB:CC:DD:EE:FF Acme Corp",
        "192.168.1.20 None None",
        "=== PORT SCANNING ===",
    ]);

    assert_eq!(
        count(&interpreter, |e| {
            *e == ReportEvent::Interrupted(Interruption::EndOfInput)
        }),
        1
    );

    let interrupted = position(&interpreter, |e| matches!(e, ReportEvent::Interrupted(_)));
    let host_summary_after = events(&interpreter)[interrupted..]
        .iter()
        .any(|e| matches!(e, ReportEvent::HostDiscoveryComplete(_)));
    assert!(host_summary_after);

    let ports = port_scan_summary(&interpreter).expect("port scanning summary shown");
    assert_eq!(ports.open_ports, 0);
    assert_eq!(ports.total_hosts, 2);
    assert!(ports.by_host.is_empty());

    let summary = final_summary(&interpreter);
    assert_eq!(summary.exposure.percent(), 0.0);
    assert!(summary.risky.is_empty());

    let tree = network_tree(&interpreter);
    assert_eq!(tree.network, "192.168.1.0/24");
    assert_eq!(tree.hosts.len(), 2);
    assert!(tree.hosts.iter().all(|host| host.ports.is_empty()));

    assert_eq!(
        count(&interpreter, |e| {
            matches!(e, ReportEvent::ServiceDetectionComplete(_))
        }),
        0
    );
}

#[test]
fn malformed_port_rows_are_skipped_without_side_effects() {
    let interpreter = run(&[
        "=== HOST DISCOVERY ===",
        "192.168.1.1 None Acme Corp",
        "=== PORT SCANNING ===",
        "192.168.1.1 ssh tcp open syn-ack ssh",
        "192.168.1.1 99999 tcp open syn-ack http",
        "192.168.1.1 80 tcp open syn-ack http",
    ]);

    let ports = interpreter.session().ports();
    assert_eq!(ports.len(), 1);
    assert_eq!(ports[0].port, 80);
    assert_eq!(
        count(&interpreter, |e| matches!(e, ReportEvent::PortOpened(_))),
        1
    );
    assert!(!events(&interpreter).iter().any(|e| match e {
        ReportEvent::PortOpened(port) => port.service == "ssh",
        _ => false,
    }));
}

#[test]
fn repeated_lines_change_nothing() {
    let once = run(&[
        "=== HOST DISCOVERY ===",
        "192.168.1.1 AA:BB:CC:DD:EE:FF Acme Corp",
        "=== PORT SCANNING ===",
        "192.168.1.1 22 tcp open syn-ack ssh",
        "=== SERVICE DETECTION ===",
        "192.168.1.1 22 tcp open ssh OpenSSH_8.9",
    ]);
    let twice = run(&[
        "=== HOST DISCOVERY ===",
        "192.168.1.1 AA:BB:CC:DD:EE:FF Acme Corp",
        "192.168.1.1 AA:BB:CC:DD:EE:FF Acme Corp",
        "=== PORT SCANNING ===",
        "192.168.1.1 22 tcp open syn-ack ssh",
        "192.168.1.1 22 tcp open syn-ack ssh",
        "=== SERVICE DETECTION ===",
        "192.168.1.1 22 tcp open ssh OpenSSH_8.9",
        "192.168.1.1 22 tcp open ssh OpenSSH_8.9",
    ]);

    assert_eq!(once.session().hosts(), twice.session().hosts());
    assert_eq!(once.session().ports(), twice.session().ports());
    assert_eq!(once.session().services(), twice.session().services());
    assert_eq!(twice.session().services_analyzed(), 1);

    let discovered = |e: &ReportEvent| matches!(e, ReportEvent::HostDiscovered(_));
    let opened = |e: &ReportEvent| matches!(e, ReportEvent::PortOpened(_));
    let detected = |e: &ReportEvent| matches!(e, ReportEvent::ServiceDetected(_));
    assert_eq!(count(&twice, discovered), 1);
    assert_eq!(count(&twice, opened), 1);
    assert_eq!(count(&twice, detected), 1);
}

#[test]
fn first_host_occurrence_wins() {
    let interpreter = run(&[
        "=== HOST DISCOVERY ===",
        "10.0.0.5 None Acme Corp",
        "10.0.0.5 11:22:33:44:55:66 Other Vendor",
    ]);

    let hosts = interpreter.session().hosts();
    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0].mac, None);
    assert_eq!(hosts[0].vendor.as_deref(), Some("Acme Corp"));
}

#[test]
fn only_open_ports_reach_summaries_and_tree() {
    let interpreter = run(&[
        "=== HOST DISCOVERY ===",
        "10.0.0.5 None None",
        "=== PORT SCANNING ===",
        "10.0.0.5 21 tcp closed reset ftp",
        "10.0.0.5 25 tcp filtered no-response smtp",
        "10.0.0.5 443 tcp open syn-ack https",
        "=== SERVICE DETECTION ===",
        "Scan complete!",
    ]);

    let ports = port_scan_summary(&interpreter).expect("port scanning summary shown");
    assert_eq!(ports.open_ports, 1);
    assert_eq!(ports.by_host[0].ports, vec![(443, "https".to_string())]);

    let tree = network_tree(&interpreter);
    let tree_ports: Vec<u16> = tree.hosts[0].ports.iter().map(|p| p.port).collect();
    assert_eq!(tree_ports, vec![443]);
}

#[test]
fn host_without_ports_is_announced_once_scanning_moves_on() {
    let interpreter = run(&[
        "=== HOST DISCOVERY ===",
        "10.0.0.1 None None",
        "10.0.0.2 None None",
        "=== PORT SCANNING ===",
        "Scanning 10.0.0.1",
        "Scanning 10.0.0.2",
        "10.0.0.2 80 tcp open syn-ack http",
        "=== SERVICE DETECTION ===",
    ]);

    let silent: Vec<Ipv4Addr> = events(&interpreter)
        .iter()
        .filter_map(|e| match e {
            ReportEvent::NoOpenPorts(ip) => Some(*ip),
            _ => None,
        })
        .collect();
    assert_eq!(silent, vec![Ipv4Addr::new(10, 0, 0, 1)]);
}

#[test]
fn cancellation_closes_the_report() {
    let mut interpreter = Interpreter::new(Vec::new());
    interpreter.start().unwrap();
    for line in ["=== HOST DISCOVERY ===", "10.0.0.1 None None"] {
        interpreter.process_line(line).unwrap();
    }
    interpreter.finish(Interruption::Cancelled).unwrap();

    let events = interpreter.into_sink();
    assert!(events.contains(&ReportEvent::Interrupted(Interruption::Cancelled)));
    assert!(matches!(events.last(), Some(ReportEvent::ReportClosed { .. })));
}

#[test]
fn finish_after_completion_adds_nothing() {
    let mut interpreter = run(SCENARIO_A);
    let before = events(&interpreter).len();

    interpreter.finish(Interruption::Cancelled).unwrap();
    assert_eq!(events(&interpreter).len(), before);
}
