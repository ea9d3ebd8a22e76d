use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Non-breaking spaces become plain spaces, runs of whitespace (newlines
/// included) collapse to one space, ends trimmed.
pub fn normalize_ws(raw: &str) -> String {
    raw.replace('\u{a0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// A digit followed by comma-separated digit groups.
static DIGIT_GROUPS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d(?:,\d+)+").expect("digit group pattern should compile"));

/// Drop commas sitting between two digits (`1,234,567` → `1234567`).
/// Other commas (`Country,Other`) are kept.
pub fn strip_thousands_separators(s: &str) -> String {
    DIGIT_GROUPS
        .replace_all(s, |caps: &Captures| caps[0].replace(',', ""))
        .into_owned()
}

/// Normalized header label: embedded newlines removed outright,
/// whitespace collapsed, thousands separators removed.
pub fn clean_header_label(raw: &str) -> String {
    let joined: String = raw.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    strip_thousands_separators(&normalize_ws(&joined))
}

/// Normalized body cell. On top of the header rules, a single leading or
/// trailing `+` (the page's delta marker) is stripped.
pub fn clean_cell(raw: &str) -> String {
    let s = strip_thousands_separators(&normalize_ws(raw));
    let s = s.strip_prefix('+').unwrap_or(&s);
    let s = s.strip_suffix('+').unwrap_or(s);
    s.trim().to_string()
}
