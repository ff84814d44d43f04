//! # Scan Log Interpreter
//!
//! Drives the phase state machine over a stream of log lines.
//!
//! ```text
//! Starting ──► HostDiscovery ──► PortScanning ──► ServiceDetection ──► Complete
//! ```
//!
//! The phase is set straight from whichever marker arrives; markers are trusted
//! verbatim and never validated against the previous phase. Entering a phase
//! first reports on the phase that just ended:
//!
//! * **PortScanning**: host discovery summary, then the phase header.
//! * **ServiceDetection**: pending "no open ports" notice, port scanning summary,
//!   phase header; service counters restart from the number of open ports.
//! * **Complete**: service detection summary, final summary, network tree.
//!
//! Data rows are parsed best-effort: a row that fails to parse is logged and
//! dropped, it never stops the interpreter. Only failures to deliver the report
//! itself are returned to the caller.

use std::net::Ipv4Addr;

use chrono::Local;
use scanview_common::phase::Phase;
use scanview_common::records::{HostRecord, PortRecord, ServiceRecord};
use tracing::{debug, trace};

use crate::classifier::{Line, LineClassifier};
use crate::error::{ReportError, RowError};
use crate::rows;
use crate::session::ScanSession;
use crate::sink::{Interruption, ReportEvent, ReportSink};
use crate::summary;

/// A record recovered from a data row of the current phase.
enum Row {
    Host(HostRecord),
    Port(PortRecord),
    Service(ServiceRecord),
}

pub struct Interpreter<S: ReportSink> {
    session: ScanSession,
    classifier: LineClassifier,
    sink: S,
}

impl<S: ReportSink> Interpreter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            session: ScanSession::new(),
            classifier: LineClassifier::new(),
            sink,
        }
    }

    pub fn session(&self) -> &ScanSession {
        &self.session
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Emits the session header.
    pub fn start(&mut self) -> Result<(), ReportError> {
        let started_at = self.session.started_at();
        self.sink.emit(ReportEvent::SessionStarted { started_at })
    }

    /// Interprets one line of the scan log.
    pub fn process_line(&mut self, line: &str) -> Result<(), ReportError> {
        match self.classifier.classify(line) {
            Line::Blank => Ok(()),
            Line::Marker(phase) => self.enter_phase(phase),
            Line::ScanningHost(ip) => self.scanning_host(ip),
            Line::AnalyzingPort { ip, port } => {
                self.sink.emit(ReportEvent::AnalyzingPort { ip, port })
            }
            Line::ServiceCount(expected) => {
                debug!(expected, "service detection size announced");
                self.session.set_services_expected(expected);
                Ok(())
            }
            Line::Row => self.data_row(line),
        }
    }

    /// Closes the report when the input stops before `Scan complete!`.
    ///
    /// Summaries are emitted for every phase that collected data, followed by the
    /// final summary and network tree, even when nothing was collected at all.
    /// Does nothing once the scan has completed.
    pub fn finish(&mut self, interruption: Interruption) -> Result<(), ReportError> {
        let phase = self.session.phase();
        if phase == Phase::Complete {
            return Ok(());
        }

        debug!(?interruption, %phase, "scan log ended early");
        self.sink.emit(ReportEvent::Interrupted(interruption))?;

        if !self.session.hosts().is_empty() {
            self.emit_host_discovery_summary()?;
        }
        if phase >= Phase::PortScanning {
            self.emit_port_scan_summary()?;
        }
        if phase >= Phase::ServiceDetection {
            self.emit_service_summary()?;
        }
        self.close_report()
    }

    fn enter_phase(&mut self, phase: Phase) -> Result<(), ReportError> {
        debug!(from = %self.session.phase(), to = %phase, "phase marker");

        match phase {
            Phase::Starting => return Ok(()),
            Phase::HostDiscovery => {
                self.session.set_phase(phase);
            }
            Phase::PortScanning => {
                self.session.set_phase(phase);
                self.session.clear_host();
                self.emit_host_discovery_summary()?;
            }
            Phase::ServiceDetection => {
                self.host_transition()?;
                self.session.set_phase(phase);
                self.session.clear_host();
                self.session.reset_service_progress();
                self.emit_port_scan_summary()?;
            }
            Phase::Complete => {
                self.session.set_phase(phase);
                self.emit_service_summary()?;
                return self.close_report();
            }
        }

        self.sink.emit(ReportEvent::PhaseHeader(phase))
    }

    fn scanning_host(&mut self, ip: Ipv4Addr) -> Result<(), ReportError> {
        self.host_transition()?;
        self.session.begin_host(ip);
        self.sink.emit(ReportEvent::ScanningHost(ip))
    }

    /// Reports the host that just finished port scanning if it had no open port.
    fn host_transition(&mut self) -> Result<(), ReportError> {
        match self.session.take_silent_host() {
            Some(ip) => self.sink.emit(ReportEvent::NoOpenPorts(ip)),
            None => Ok(()),
        }
    }

    fn parse_row(&self, line: &str) -> Result<Option<Row>, RowError> {
        let row = match self.session.phase() {
            Phase::HostDiscovery => rows::parse_host_row(line)?.map(Row::Host),
            Phase::PortScanning => rows::parse_port_row(line)?.map(Row::Port),
            Phase::ServiceDetection => rows::parse_service_row(line)?.map(Row::Service),
            Phase::Starting | Phase::Complete => None,
        };
        Ok(row)
    }

    fn data_row(&mut self, line: &str) -> Result<(), ReportError> {
        let row = match self.parse_row(line) {
            Ok(Some(row)) => row,
            Ok(None) => {
                trace!(line, "ignoring unrecognized line");
                return Ok(());
            }
            Err(err) => {
                debug!(%err, line, "skipping malformed row");
                return Ok(());
            }
        };

        match row {
            Row::Host(host) => {
                if self.session.insert_host(host.clone()) {
                    self.sink.emit(ReportEvent::HostDiscovered(host))?;
                }
            }
            Row::Port(port) => {
                if !port.is_open() {
                    trace!(ip = %port.ip, port = port.port, state = %port.state, "port not open");
                } else if self.session.insert_port(port.clone()) {
                    self.sink.emit(ReportEvent::PortOpened(port))?;
                }
            }
            Row::Service(service) => {
                if self.session.insert_service(service.clone()) {
                    self.sink.emit(ReportEvent::ServiceDetected(service))?;
                }
            }
        }
        Ok(())
    }

    fn emit_host_discovery_summary(&mut self) -> Result<(), ReportError> {
        let summary = summary::host_discovery(&self.session);
        self.sink.emit(ReportEvent::HostDiscoveryComplete(summary))
    }

    fn emit_port_scan_summary(&mut self) -> Result<(), ReportError> {
        let summary = summary::port_scan(&self.session);
        self.sink.emit(ReportEvent::PortScanComplete(summary))
    }

    fn emit_service_summary(&mut self) -> Result<(), ReportError> {
        let summary = summary::service_detection(&self.session);
        self.sink.emit(ReportEvent::ServiceDetectionComplete(summary))
    }

    fn close_report(&mut self) -> Result<(), ReportError> {
        let final_summary = summary::final_summary(&self.session, self.session.elapsed());
        self.sink.emit(ReportEvent::FinalSummary(final_summary))?;
        self.sink
            .emit(ReportEvent::NetworkTree(summary::network_tree(&self.session)))?;
        self.sink.emit(ReportEvent::ReportClosed {
            generated_at: Local::now(),
        })
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
