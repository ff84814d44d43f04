#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Disables ANSI colors in the report.
    ///
    /// Colors are also dropped when stdout is not a terminal.
    pub no_color: bool,
    /// `1` hides the live `Scanning`/`Analyzing` announcements.
    pub quiet: u8,
    /// Diagnostic log detail on stderr (0: warnings, 1: debug, 2+: trace).
    pub verbosity: u8,
}

impl Config {
    pub fn show_progress(&self) -> bool {
        self.quiet == 0
    }
}
