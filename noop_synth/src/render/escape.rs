//! String literal escaping for rendered source.

/// Escapes `text` for use between double quotes.
///
/// # Examples
///
/// ```
/// use noop_synth::render::escape::escape_string_literal;
///
/// assert_eq!(escape_string_literal("plain"), "plain");
/// assert_eq!(escape_string_literal("say \"hi\""), "say \\\"hi\\\"");
/// assert_eq!(escape_string_literal("a\\b"), "a\\\\b");
/// ```
#[must_use]
pub fn escape_string_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\0' => escaped.push_str("\\0"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders `text` as a double-quoted literal.
#[must_use]
pub fn quote(text: &str) -> String {
    format!("\"{}\"", escape_string_literal(text))
}
