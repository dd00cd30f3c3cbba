// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Markers the source (and spreadsheet tools) use for "no value".
const MISSING_MARKERS: &[&str] = &["n/a", "na", "-", "—", "nan", "null", "none", "#n/a"];

/// Numeric cell text with formatting removed: surrounding whitespace,
/// thousands separators, inner spaces and a leading `+`.
/// `None` when nothing is left or the cell is a missing-value marker.
pub fn strip_number(raw: &str) -> Option<String> {
    let t = raw.trim();
    if t.is_empty() || MISSING_MARKERS.iter().any(|m| t.eq_ignore_ascii_case(m)) {
        return None;
    }
    let cleaned: String = t
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    let cleaned = cleaned.strip_prefix('+').unwrap_or(&cleaned).to_string();
    if cleaned.is_empty() { None } else { Some(cleaned) }
}

/// Country cell: whitespace-normalized, `None` when empty.
pub fn clean_name(raw: &str) -> Option<String> {
    let n = normalize_ws(raw);
    if n.is_empty() { None } else { Some(n) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators_go() {
        assert_eq!(strip_number("1,234,567").as_deref(), Some("1234567"));
        assert_eq!(strip_number("  +12,000 ").as_deref(), Some("12000"));
        assert_eq!(strip_number("1 234").as_deref(), Some("1234"));
    }

    #[test]
    fn missing_markers_are_absent() {
        for raw in ["", "   ", "N/A", "n/a", "-", "NaN", "—"] {
            assert_eq!(strip_number(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn garbage_is_kept_for_the_parser_to_reject() {
        assert_eq!(strip_number("12a").as_deref(), Some("12a"));
    }

    #[test]
    fn names_collapse_whitespace() {
        assert_eq!(clean_name("  South\n  Korea ").as_deref(), Some("South Korea"));
        assert_eq!(clean_name(" \t "), None);
    }
}
