use std::io;

use thiserror::Error;

/// A line looked like a data row but one of its fields is unusable.
///
/// Never fatal: the interpreter drops the line and moves on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("invalid IPv4 address '{0}'")]
    InvalidAddress(String),

    #[error("port '{0}' is outside 0-65535")]
    InvalidPort(String),
}

/// The report could not be delivered to its destination.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

impl ReportError {
    /// True when the reader of the report went away (e.g. `| head`).
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            ReportError::Output(err) => err.kind() == io::ErrorKind::BrokenPipe,
        }
    }
}
