//! # Terminal Report
//!
//! Renders interpreter events as the human readable report on stdout.
//!
//! Colors carry meaning: green for findings, red for critical exposure, yellow
//! for warnings, blue for progress. Layout is fixed-width text with `├──`/`└──`
//! guides for the network tree.

use std::io::{self, Write};

use chrono::{DateTime, Local};
use colored::*;
use scanview_common::config::Config;
use scanview_common::phase::Phase;
use scanview_common::records::{HostRecord, PortRecord, ServiceRecord};
use scanview_core::summary::{
    self, FinalSummary, HostDiscoverySummary, NetworkTree, PortScanSummary, ServiceSummary,
};
use scanview_core::{Interruption, ReportError, ReportEvent, ReportSink};

use crate::terminal::print::{self, Printer};
use crate::terminal::{colors, format};

const TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";
const TREE_INDENT: &str = "   ";

pub struct TerminalReport<W: Write> {
    printer: Printer<W>,
    cfg: Config,
}

impl<W: Write> TerminalReport<W> {
    pub fn new(out: W, cfg: Config) -> Self {
        Self {
            printer: Printer::new(out),
            cfg,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.printer.into_inner()
    }

    fn render(&mut self, event: ReportEvent) -> io::Result<()> {
        match event {
            ReportEvent::SessionStarted { started_at } => self.session_header(started_at),
            ReportEvent::PhaseHeader(phase) => self.phase_header(phase),
            ReportEvent::ScanningHost(ip) if self.cfg.show_progress() => {
                self.printer.blank()?;
                let msg = format!("-> Scanning {ip}...").color(colors::SECONDARY);
                self.printer.print(&msg.to_string())
            }
            ReportEvent::AnalyzingPort { ip, port } if self.cfg.show_progress() => {
                self.printer.blank()?;
                let msg = format!("-> Analyzing {ip}:{port}...").color(colors::SECONDARY);
                self.printer.print(&msg.to_string())
            }
            ReportEvent::ScanningHost(_) | ReportEvent::AnalyzingPort { .. } => Ok(()),
            ReportEvent::NoOpenPorts(_) => self
                .printer
                .print(&format!("  {}", "(no open ports)".dimmed())),
            ReportEvent::HostDiscovered(host) => self.host_discovered(&host),
            ReportEvent::PortOpened(port) => self.port_opened(&port),
            ReportEvent::ServiceDetected(service) => self.service_detected(&service),
            ReportEvent::HostDiscoveryComplete(summary) => self.host_discovery_summary(&summary),
            ReportEvent::PortScanComplete(summary) => self.port_scan_summary(&summary),
            ReportEvent::ServiceDetectionComplete(summary) => self.service_summary(&summary),
            ReportEvent::Interrupted(interruption) => self.interrupted(interruption),
            ReportEvent::FinalSummary(summary) => self.final_summary(&summary),
            ReportEvent::NetworkTree(tree) => self.network_tree(&tree),
            ReportEvent::ReportClosed { generated_at } => self.closing(generated_at),
        }
    }

    fn session_header(&mut self, started_at: DateTime<Local>) -> io::Result<()> {
        self.printer.fat_separator()?;
        self.printer.header("network security assessment")?;
        self.printer
            .aligned_line("Started", started_at.format(TIMESTAMP).to_string())?;
        self.printer.fat_separator()
    }

    fn phase_header(&mut self, phase: Phase) -> io::Result<()> {
        self.printer.blank()?;
        self.printer.header(phase.title())
    }

    fn host_discovered(&mut self, host: &HostRecord) -> io::Result<()> {
        let msg = format!("+ Host discovered: {}", host.ip).color(colors::FOUND);
        self.printer.print(&format!(
            "{}{}",
            msg,
            format::vendor_suffix(host.vendor.as_deref())
        ))
    }

    fn port_opened(&mut self, port: &PortRecord) -> io::Result<()> {
        let msg = format!("+ Port {}:{} open ({})", port.ip, port.port, port.service);
        self.printer
            .print(&format!("  {}", msg.color(colors::FOUND)))
    }

    fn service_detected(&mut self, service: &ServiceRecord) -> io::Result<()> {
        let fingerprint = match &service.fingerprint {
            Some(fingerprint) => format!(" -> {}", fingerprint.color(colors::ACCENT)),
            None => String::new(),
        };
        self.printer.print(&format!(
            "  + Service {}:{} ({}){}",
            service.ip, service.port, service.service, fingerprint
        ))
    }

    fn host_discovery_summary(&mut self, summary: &HostDiscoverySummary) -> io::Result<()> {
        self.printer.section("HOST DISCOVERY COMPLETE")?;
        self.printer
            .print(&format!("Total hosts found: {}", summary.hosts.len()))?;

        if summary.hosts.is_empty() {
            return Ok(());
        }

        self.printer.blank()?;
        self.printer.print("Discovered hosts:")?;
        for host in &summary.hosts {
            self.printer.bullet(format!(
                "{}{}",
                format::ip(&host.ip),
                format::vendor_suffix(host.vendor.as_deref())
            ))?;
        }

        if summary.vendor_count > 0 {
            self.printer.blank()?;
            self.printer
                .print(&format!("Device manufacturers: {}", summary.vendor_count))?;
        }
        Ok(())
    }

    fn port_scan_summary(&mut self, summary: &PortScanSummary) -> io::Result<()> {
        self.printer.section("PORT SCANNING COMPLETE")?;
        self.printer
            .print(&format!("Total open ports: {}", summary.open_ports))?;

        if summary.by_host.is_empty() {
            self.printer.blank()?;
            return self.printer.print("No open ports discovered on any hosts");
        }

        self.printer.blank()?;
        self.printer.print("Open ports by host:")?;
        for host in &summary.by_host {
            self.printer.bullet(format!(
                "{}: {}",
                format::ip(&host.ip),
                format::port_list(&host.ports)
            ))?;
        }

        self.printer.blank()?;
        self.printer.print(&format!(
            "Hosts with open ports: {}/{}",
            summary.hosts_with_ports(),
            summary.total_hosts
        ))
    }

    fn service_summary(&mut self, summary: &ServiceSummary) -> io::Result<()> {
        self.printer.section("SERVICE DETECTION COMPLETE")?;
        self.printer.print(&format!(
            "Services analyzed: {} ({} of {} expected)",
            summary.total, summary.analyzed, summary.expected
        ))?;

        if summary.total == 0 {
            self.printer.blank()?;
            return self.printer.print("No detailed service information available");
        }

        if !summary.fingerprinted.is_empty() {
            self.printer.blank()?;
            self.printer.print("Detailed fingerprints:")?;
            for service in &summary.fingerprinted {
                self.printer.bullet(format!(
                    "{} -> {}",
                    format::endpoint(&service.key()),
                    service.fingerprint.as_deref().unwrap_or_default()
                ))?;
            }
        }

        if !summary.standard.is_empty() {
            self.printer.blank()?;
            self.printer.print("Standard services:")?;
            for group in &summary.standard {
                self.printer.bullet(format!(
                    "{}: {}",
                    group.service,
                    format::endpoint_list(&group.locations)
                ))?;
            }
        }
        Ok(())
    }

    fn interrupted(&mut self, interruption: Interruption) -> io::Result<()> {
        let msg = match interruption {
            Interruption::EndOfInput => "! Scan interrupted - showing partial results",
            Interruption::Cancelled => "! Scan interrupted by user",
        };
        self.printer.blank()?;
        self.printer
            .print(&msg.color(colors::WARNING).bold().to_string())
    }

    fn final_summary(&mut self, summary: &FinalSummary) -> io::Result<()> {
        self.printer.blank()?;
        self.printer.header("scan summary")?;
        self.printer
            .aligned_line("Scan Duration", summary::format_elapsed(summary.elapsed))?;
        self.printer
            .aligned_line("Hosts Discovered", summary.hosts.to_string())?;
        self.printer
            .aligned_line("Open Ports Found", summary.open_ports.to_string())?;
        self.printer
            .aligned_line("Services Detected", summary.services.to_string())?;

        self.printer.section("SECURITY ASSESSMENT")?;
        let exposure = &summary.exposure;
        self.printer.aligned_line(
            "Network Exposure",
            format::exposure(exposure.percent(), exposure.hosts_with_ports, exposure.total_hosts),
        )?;

        if summary.risky.is_empty() {
            self.printer
                .aligned_line("Critical Services", "None detected".color(colors::FOUND))?;
        } else {
            let found = format!("{} found", summary.risky.len()).color(colors::CRITICAL);
            self.printer.aligned_line("Critical Services", found)?;
            for (idx, port) in summary.risky.iter().enumerate() {
                let last = idx + 1 == summary.risky.len();
                self.printer.tree_branch(
                    TREE_INDENT,
                    last,
                    format!("{} ({})", format::endpoint(&port.key()), port.service),
                )?;
            }
        }

        if !summary.fingerprinted.is_empty() {
            self.printer.section("SERVICE FINGERPRINTS")?;
            for service in &summary.fingerprinted {
                self.printer
                    .print(&format!("{TREE_INDENT}{}", format::endpoint(&service.key())))?;
                self.printer.tree_branch(
                    TREE_INDENT,
                    true,
                    service.fingerprint.as_deref().unwrap_or_default(),
                )?;
            }
        }

        if let Some(topology) = &summary.topology {
            self.printer.section("NETWORK TOPOLOGY")?;
            self.printer.aligned_line(
                "Device Vendors",
                format!("{} different manufacturers", topology.vendor_count),
            )?;
            if let Some((service, count)) = &topology.top_service {
                self.printer.aligned_line(
                    "Common Services",
                    format!("{service} ({})", format::plural(*count, "instance", "instances")),
                )?;
            }
        }
        Ok(())
    }

    fn network_tree(&mut self, tree: &NetworkTree) -> io::Result<()> {
        self.printer.blank()?;
        self.printer.header("network tree")?;
        self.printer.print(&format!(
            "Network: {}",
            tree.network.as_str().color(colors::ACCENT)
        ))?;

        if tree.hosts.is_empty() {
            return self
                .printer
                .tree_branch(TREE_INDENT, true, "(no hosts discovered)".dimmed());
        }

        for (h, host) in tree.hosts.iter().enumerate() {
            let last_host = h + 1 == tree.hosts.len();
            self.printer.tree_branch(
                TREE_INDENT,
                last_host,
                format!(
                    "{}{}",
                    format::ip(&host.ip),
                    format::vendor_suffix(host.vendor.as_deref())
                ),
            )?;

            let host_guide = print::tree_guide(TREE_INDENT, last_host);
            if host.ports.is_empty() {
                self.printer
                    .tree_branch(&host_guide, true, "(no open ports)".dimmed())?;
                continue;
            }

            for (p, port) in host.ports.iter().enumerate() {
                let last_port = p + 1 == host.ports.len();
                self.printer.tree_branch(
                    &host_guide,
                    last_port,
                    format!("{}/{} ({})", port.port, port.protocol, port.service),
                )?;

                if let Some(fingerprint) = &port.fingerprint {
                    let port_guide = print::tree_guide(&host_guide, last_port);
                    self.printer
                        .tree_branch(&port_guide, true, fingerprint.color(colors::ACCENT))?;
                }
            }
        }
        Ok(())
    }

    fn closing(&mut self, generated_at: DateTime<Local>) -> io::Result<()> {
        self.printer.blank()?;
        self.printer.fat_separator()?;
        let msg = format!("Report generated at {}", generated_at.format(TIMESTAMP));
        self.printer.centerln(&msg.bold().to_string())?;
        self.printer.fat_separator()
    }
}

impl<W: Write> ReportSink for TerminalReport<W> {
    fn emit(&mut self, event: ReportEvent) -> Result<(), ReportError> {
        self.render(event)?;
        self.printer.flush()?;
        Ok(())
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
