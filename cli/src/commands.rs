//! # Command Line Interface Definitions
//!
//! `scanview` is a filter: it reads a scan log on stdin and writes a report to
//! stdout, so the command line only carries presentation flags. They are
//! translated into [`Config`] so the rest of the program never sees `clap`.

pub mod follow;

use clap::{ArgAction, Parser};
use scanview_common::config::Config;

#[derive(Parser)]
#[command(name = "scanview")]
#[command(about = "Live report for multi-phase network scan logs read from stdin.")]
#[command(after_help = "Example: bash launcher.sh | scanview")]
pub struct CommandLine {
    /// Disable ANSI colors
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Hide live progress announcements (-q)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Increase diagnostic detail on stderr (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbosity: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<&CommandLine> for Config {
    fn from(cmd: &CommandLine) -> Self {
        Self {
            no_color: cmd.no_color,
            quiet: cmd.quiet,
            verbosity: cmd.verbosity,
        }
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
