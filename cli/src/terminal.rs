pub mod colors;
pub mod format;
pub mod logging;
pub mod print;
pub mod report;

use std::io::IsTerminal;

use scanview_common::config::Config;

/// Decides colors per stream: the report follows stdout, diagnostics follow stderr.
///
/// `--no-color` turns both off.
pub fn init_colors(cfg: &Config) {
    if cfg.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
    if cfg.no_color {
        console::set_colors_enabled_stderr(false);
    }
}
