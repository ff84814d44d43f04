//! # Scan Session
//!
//! All state accumulated while interpreting one scan log.
//!
//! The three result collections are append-only and keep arrival order. Each
//! insert does a linear existence check on the record key; a duplicate is
//! dropped and the first-seen record stays untouched.

use std::net::Ipv4Addr;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use scanview_common::phase::Phase;
use scanview_common::records::{HostRecord, PortRecord, ServiceRecord};

#[derive(Debug, Clone)]
pub struct ScanSession {
    hosts: Vec<HostRecord>,
    ports: Vec<PortRecord>,
    services: Vec<ServiceRecord>,
    phase: Phase,
    current_host: Option<Ipv4Addr>,
    current_host_has_ports: bool,
    services_analyzed: usize,
    services_expected: usize,
    started_at: DateTime<Local>,
    started: Instant,
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanSession {
    pub fn new() -> Self {
        Self {
            hosts: Vec::new(),
            ports: Vec::new(),
            services: Vec::new(),
            phase: Phase::Starting,
            current_host: None,
            current_host_has_ports: false,
            services_analyzed: 0,
            services_expected: 0,
            started_at: Local::now(),
            started: Instant::now(),
        }
    }

    pub fn hosts(&self) -> &[HostRecord] {
        &self.hosts
    }

    pub fn ports(&self) -> &[PortRecord] {
        &self.ports
    }

    pub fn services(&self) -> &[ServiceRecord] {
        &self.services
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn services_analyzed(&self) -> usize {
        self.services_analyzed
    }

    pub fn services_expected(&self) -> usize {
        self.services_expected
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Sets the phase exactly as announced by a marker.
    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Appends `host` unless its address is already known.
    ///
    /// Returns `true` when the record was added.
    pub fn insert_host(&mut self, host: HostRecord) -> bool {
        if self.hosts.iter().any(|known| known.key() == host.key()) {
            return false;
        }
        self.hosts.push(host);
        true
    }

    /// Appends an open port unless `(ip, port)` is already known.
    ///
    /// Ports in any state other than `open` are never stored.
    pub fn insert_port(&mut self, port: PortRecord) -> bool {
        if !port.is_open() || self.ports.iter().any(|known| known.key() == port.key()) {
            return false;
        }
        self.ports.push(port);
        self.current_host_has_ports = true;
        true
    }

    /// Appends `service` unless `(ip, port)` is already known.
    pub fn insert_service(&mut self, service: ServiceRecord) -> bool {
        if self.services.iter().any(|known| known.key() == service.key()) {
            return false;
        }
        self.services.push(service);
        self.services_analyzed += 1;
        true
    }

    /// Starts tracking a newly announced host.
    pub(crate) fn begin_host(&mut self, ip: Ipv4Addr) {
        self.current_host = Some(ip);
        self.current_host_has_ports = false;
    }

    /// Forgets the announced host without reporting on it.
    pub(crate) fn clear_host(&mut self) {
        self.current_host = None;
        self.current_host_has_ports = false;
    }

    /// Hands back the host that just finished port scanning without a single
    /// open port, if there is one.
    ///
    /// The host is consumed, so a second call for the same host yields `None`.
    pub(crate) fn take_silent_host(&mut self) -> Option<Ipv4Addr> {
        if self.phase != Phase::PortScanning || self.current_host_has_ports {
            return None;
        }
        self.current_host.take()
    }

    pub(crate) fn set_services_expected(&mut self, expected: usize) {
        self.services_expected = expected;
    }

    /// Resets service counters when service detection begins.
    pub(crate) fn reset_service_progress(&mut self) {
        self.services_analyzed = 0;
        self.services_expected = self.ports.len();
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
