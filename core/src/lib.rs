//! # Scanview Core
//!
//! Incremental interpreter for the streaming log of a multi-phase network scan.
//!
//! Lines flow through four stages:
//!
//! 1. **[`classifier`]** decides what shape a line has (phase marker, announcement, data row).
//! 2. **[`interpreter`]** drives the phase state machine and hands data rows to [`rows`].
//! 3. **[`session`]** accumulates deduplicated hosts, open ports and services.
//! 4. **[`summary`]** turns the session into per-phase summaries and the network tree.
//!
//! Everything the interpreter wants to show is emitted as a [`sink::ReportEvent`]
//! through the [`sink::ReportSink`] port, so the core never touches a terminal.

pub mod classifier;
pub mod error;
pub mod interpreter;
pub mod rows;
pub mod session;
pub mod sink;
pub mod summary;

pub use error::{ReportError, RowError};
pub use interpreter::Interpreter;
pub use session::ScanSession;
pub use sink::{Interruption, ReportEvent, ReportSink};
