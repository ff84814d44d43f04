use colored::Color;

pub const PRIMARY: Color = Color::BrightWhite;
pub const SECONDARY: Color = Color::Blue;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const IPV4_ADDR: Color = Color::BrightBlue;
pub const VENDOR: Color = Color::Cyan;

/// Something was found.
pub const FOUND: Color = Color::Green;
/// Security relevant finding.
pub const CRITICAL: Color = Color::Red;
pub const WARNING: Color = Color::Yellow;
