//! Whitespace cleanup applied to raw argument strings before they reach
//! the parsers. Blank means the ASCII space and horizontal tab; full
//! Unicode whitespace is deliberately not considered.

use itertools::Itertools;

pub fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// True when the string is empty or contains nothing but blanks
pub fn is_blank_str(s: &str) -> bool {
    s.chars().all(is_blank)
}

/// Strips leading blanks only
pub fn lstrip(s: &str) -> String {
    s.trim_start_matches(is_blank).to_string()
}

/// Strips trailing blanks only
pub fn rstrip(s: &str) -> String {
    s.trim_end_matches(is_blank).to_string()
}

/// Strips both ends and reduces every interior run of blanks to a single
/// space. Idempotent: collapsing a collapsed string is a no-op.
pub fn collapse_whitespace(s: &str) -> String {
    rstrip(&lstrip(s))
        .chars()
        .coalesce(|a, b| {
            if is_blank(a) && is_blank(b) {
                Ok(' ')
            } else {
                Err((a, b))
            }
        })
        .map(|c| if is_blank(c) { ' ' } else { c })
        .collect()
}
