mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, follow};
use scanview_common::config::Config;
use terminal::logging;
use tracing::error;

/// Longest error message shown when the run fails.
const ERROR_PREVIEW: usize = 100;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    let cfg = Config::from(&commands);

    logging::init_logging(&cfg);
    terminal::init_colors(&cfg);

    let outcome = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(anyhow::Error::from)
        .and_then(|runtime| {
            let outcome = runtime.block_on(follow::follow(&cfg));
            // stdin is read on a blocking thread that cannot be cancelled after Ctrl-C
            runtime.shutdown_background();
            outcome
        });

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if follow::is_broken_pipe(&err) => ExitCode::SUCCESS,
        Err(err) => {
            let message: String = format!("{err:#}").chars().take(ERROR_PREVIEW).collect();
            error!("Parser error: {message}");
            ExitCode::FAILURE
        }
    }
}
