//! Text helpers for the Primer module generator.
//!
//! Pure string functions used when deriving human-readable values from
//! npm-style module names, e.g. turning `primer-buttons` into `Buttons`.

/// Upper-case the first character of a string, leaving the rest untouched.
///
/// Multi-byte first characters are handled via [`char::to_uppercase`], so a
/// single lower-case character may expand to several.
///
/// # Example
///
/// ```
/// use gen_text::capitalize;
///
/// assert_eq!(capitalize("buttons"), "Buttons");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip a leading `primer-` from an npm module name.
///
/// Only the leading occurrence is removed; names without the prefix are
/// returned unchanged.
///
/// # Example
///
/// ```
/// use gen_text::strip_primer_prefix;
///
/// assert_eq!(strip_primer_prefix("primer-buttons"), "buttons");
/// assert_eq!(strip_primer_prefix("octicons"), "octicons");
/// ```
pub fn strip_primer_prefix(s: &str) -> &str {
    s.strip_prefix("primer-").unwrap_or(s)
}
