use std::io;

use console::{Style, StyledObject};
use scanview_common::config::Config;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Prefixes each diagnostic with a colored status symbol instead of a timestamp.
pub struct ScanviewFormatter;

impl<S, N> FormatEvent<S, N> for ScanviewFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} ", symbol(*event.metadata().level()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Status symbol for `level`, colored only when stderr takes colors.
fn symbol(level: Level) -> StyledObject<&'static str> {
    let (symbol, style) = match level {
        Level::TRACE => ("[ ]", Style::new().dim()),
        Level::DEBUG => ("[?]", Style::new().blue()),
        Level::INFO => ("[+]", Style::new().green().bold()),
        Level::WARN => ("[*]", Style::new().yellow().bold()),
        Level::ERROR => ("[-]", Style::new().red().bold()),
    };
    style.for_stderr().apply_to(symbol)
}

fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Sends diagnostics to stderr so they never mix with the report on stdout.
pub fn init_logging(cfg: &Config) {
    let level = level(cfg.verbosity);
    let filter = EnvFilter::new(format!(
        "warn,scanview_core={level},scanview_cli={level}"
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .event_format(ScanviewFormatter)
        .init();
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
