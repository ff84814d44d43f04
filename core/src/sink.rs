//! # Report Port
//!
//! The boundary between the interpreter and whatever presents its findings.
//!
//! The interpreter never formats text. It emits [`ReportEvent`]s in the order
//! they should appear, and a [`ReportSink`] (the terminal renderer in the cli,
//! or a plain `Vec` in tests) decides what they look like.

use std::net::Ipv4Addr;

use chrono::{DateTime, Local};
use scanview_common::phase::Phase;
use scanview_common::records::{HostRecord, PortRecord, ServiceRecord};

use crate::error::ReportError;
use crate::summary::{
    FinalSummary, HostDiscoverySummary, NetworkTree, PortScanSummary, ServiceSummary,
};

/// Why a report was closed before the scan completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interruption {
    /// The input stream ended.
    EndOfInput,
    /// The user pressed Ctrl-C.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    SessionStarted { started_at: DateTime<Local> },
    PhaseHeader(Phase),

    ScanningHost(Ipv4Addr),
    AnalyzingPort { ip: Ipv4Addr, port: u16 },
    NoOpenPorts(Ipv4Addr),

    HostDiscovered(HostRecord),
    PortOpened(PortRecord),
    ServiceDetected(ServiceRecord),

    HostDiscoveryComplete(HostDiscoverySummary),
    PortScanComplete(PortScanSummary),
    ServiceDetectionComplete(ServiceSummary),

    Interrupted(Interruption),
    FinalSummary(FinalSummary),
    NetworkTree(NetworkTree),
    ReportClosed { generated_at: DateTime<Local> },
}

pub trait ReportSink {
    fn emit(&mut self, event: ReportEvent) -> Result<(), ReportError>;
}

/// Collects events in memory.
impl ReportSink for Vec<ReportEvent> {
    fn emit(&mut self, event: ReportEvent) -> Result<(), ReportError> {
        self.push(event);
        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn emit(&mut self, event: ReportEvent) -> Result<(), ReportError> {
        (**self).emit(event)
    }
}
