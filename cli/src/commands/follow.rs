use std::future::Future;
use std::io;

use anyhow::Context;
use scanview_common::config::Config;
use scanview_core::{Interpreter, Interruption, ReportError, ReportSink};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::terminal::report::TerminalReport;

/// Follows the scan log on stdin until it ends or the user presses Ctrl-C.
pub async fn follow(cfg: &Config) -> anyhow::Result<()> {
    let report = TerminalReport::new(io::stdout(), *cfg);
    let interpreter = Interpreter::new(report);
    let stdin = BufReader::new(tokio::io::stdin());

    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            debug!(%err, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    follow_stream(stdin, interpreter, ctrl_c).await?;
    Ok(())
}

/// Feeds `reader` line by line into the interpreter.
///
/// Whichever comes first, end of input or `cancel`, decides how the report is
/// closed. Lines are decoded lossily so a stray invalid byte cannot end the run.
pub async fn follow_stream<R, S, C>(
    mut reader: R,
    mut interpreter: Interpreter<S>,
    cancel: C,
) -> anyhow::Result<Interpreter<S>>
where
    R: AsyncBufRead + Unpin,
    S: ReportSink,
    C: Future<Output = ()>,
{
    interpreter.start().context("failed to write report header")?;

    tokio::pin!(cancel);
    let mut buf: Vec<u8> = Vec::new();

    let ending = loop {
        buf.clear();
        tokio::select! {
            biased;
            _ = &mut cancel => break Interruption::Cancelled,
            read = reader.read_until(b'\n', &mut buf) => {
                if read.context("failed to read scan log")? == 0 {
                    break Interruption::EndOfInput;
                }
                let line = String::from_utf8_lossy(&buf);
                interpreter.process_line(line.trim_end_matches(['\n', '\r']))?;
            }
        }
    };

    interpreter.finish(ending)?;
    Ok(interpreter)
}

/// True when the report's reader closed early, which ends the run silently.
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<ReportError>()
            .is_some_and(ReportError::is_broken_pipe)
            || cause
                .downcast_ref::<io::Error>()
                .is_some_and(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
