//! String-literal escaping for inlined values
//!
//! Quill inlines every literal into the statement text, so this module is
//! the injection barrier. The character set and replacement map match the
//! standard MySQL string-literal escape table.

/// Escape a string value and wrap it in single quotes.
///
/// The nine characters `\0`, backspace, tab, newline, carriage return,
/// `\x1a`, `"`, `'` and `\` are each replaced by their two-character
/// escape sequence. Values with nothing to escape are still quote-wrapped.
pub fn escape_string(val: &str) -> String {
    let mut escaped = String::with_capacity(val.len() + 2);
    escaped.push('\'');
    for ch in val.chars() {
        match ch {
            '\0' => escaped.push_str("\\0"),
            '\u{0008}' => escaped.push_str("\\b"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{001a}' => escaped.push_str("\\Z"),
            '"' => escaped.push_str("\\\""),
            '\'' => escaped.push_str("\\'"),
            '\\' => escaped.push_str("\\\\"),
            _ => escaped.push(ch),
        }
    }
    escaped.push('\'');
    escaped
}
