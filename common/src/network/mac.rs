/// Literal the launcher writes when a column has no value.
const ABSENT: &str = "None";

/// Normalizes the MAC column of a host row.
///
/// Returns `None` for the launcher's `None` placeholder, otherwise the address
/// with its hex digits upper-cased.
pub fn normalize_mac(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw == ABSENT {
        return None;
    }
    Some(raw.to_ascii_uppercase())
}

/// Normalizes free-text columns (vendor, fingerprint).
///
/// Blank text and the `None` placeholder both become the absent marker.
pub fn normalize_text(raw: &str) -> Option<String> {
    let raw = raw.trim();
    match raw {
        "" | ABSENT => None,
        text => Some(text.to_string()),
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
