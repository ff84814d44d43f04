use std::fmt::Display;
use std::io::{self, Write};

use crate::terminal::colors;
use colored::*;

pub const TOTAL_WIDTH: usize = 64;

/// Width of the key column in aligned `key....: value` lines.
pub const KEY_WIDTH: usize = 17;

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

/// Line oriented writer for the report.
///
/// Every method writes whole lines and hands write errors back, so a closed
/// pipe surfaces to the caller instead of being printed over.
pub struct Printer<W: Write> {
    out: W,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn print(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{msg}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        self.print("")
    }

    /// Centered title framed by dashes: `─────⟦ TITLE ⟧─────`.
    pub fn header(&mut self, msg: &str) -> io::Result<()> {
        let formatted: String = format!("⟦ {} ⟧", msg);
        let msg_len: usize = formatted.chars().count();

        let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
        let left: usize = dash_count / 2;
        let right: usize = dash_count - left;

        let line: ColoredString = format!(
            "{}{}{}",
            "─".repeat(left),
            formatted.to_uppercase().bright_green(),
            "─".repeat(right)
        )
        .color(colors::SEPARATOR);

        self.print(&line.to_string())
    }

    /// Bold section title underlined to its own width.
    pub fn section(&mut self, title: &str) -> io::Result<()> {
        self.blank()?;
        self.print(&title.bold().to_string())?;
        let underline: ColoredString = "─".repeat(title.chars().count()).color(colors::SEPARATOR);
        self.print(&underline.to_string())
    }

    pub fn fat_separator(&mut self) -> io::Result<()> {
        let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
        self.print(&sep.to_string())
    }

    pub fn aligned_line<V>(&mut self, key: &str, value: V) -> io::Result<()>
    where
        V: Display + WithDefaultColor,
    {
        let dots: String = ".".repeat(KEY_WIDTH.saturating_sub(key.len()));
        let colon: String = format!(
            "{}{}",
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR)
        );
        let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
        self.print(&format!("{}{} {}", key.color(colors::PRIMARY), colon, value))
    }

    /// `  • text` list item.
    pub fn bullet<T: Display>(&mut self, text: T) -> io::Result<()> {
        self.print(&format!("  {} {}", "•".color(colors::SEPARATOR), text))
    }

    /// One tree row: `prefix` carries the guides of the parent levels.
    pub fn tree_branch<T: Display>(&mut self, prefix: &str, last: bool, text: T) -> io::Result<()> {
        let branch: &str = if last { "└──" } else { "├──" };
        self.print(&format!(
            "{}{} {}",
            prefix.color(colors::SEPARATOR),
            branch.color(colors::SEPARATOR),
            text
        ))
    }

    pub fn centerln(&mut self, msg: &str) -> io::Result<()> {
        let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
        self.print(&format!("{}{}", space, msg))
    }
}

/// Guide carried into the children of a tree node.
pub fn tree_guide(prefix: &str, last: bool) -> String {
    format!("{}{}", prefix, if last { "    " } else { "│   " })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
