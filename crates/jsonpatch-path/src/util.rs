//! Sequence index helpers.

/// Check if a string consists only of ASCII digits.
pub fn is_integer(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a path segment as a sequence index.
///
/// Only plain decimal digits are accepted (leading zeros included). Signs,
/// whitespace and values that overflow `usize` yield `None`.
///
/// # Example
///
/// ```
/// use jsonpatch_path::parse_index;
///
/// assert_eq!(parse_index("0"), Some(0));
/// assert_eq!(parse_index("007"), Some(7));
/// assert_eq!(parse_index("-1"), None);
/// assert_eq!(parse_index("x"), None);
/// ```
pub fn parse_index(step: &str) -> Option<usize> {
    if !is_integer(step) {
        return None;
    }
    step.parse().ok()
}
