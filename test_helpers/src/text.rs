//! Shared text normalization helpers for rendered source.

/// Removes the common leading indentation of `value`.
///
/// A leading newline is dropped and the result always ends with exactly one
/// newline, so expected sources can be written as indented raw strings.
#[must_use]
pub fn dedent(value: &str) -> String {
    let body = value.strip_prefix('\n').unwrap_or(value).trim_end();
    let margin = body
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);
    let mut out = String::with_capacity(body.len());
    for line in body.lines() {
        out.push_str(line.get(margin..).unwrap_or_else(|| line.trim_start()));
        out.push('\n');
    }
    out
}

/// Lines of `source` with surrounding whitespace removed.
#[must_use]
pub fn trimmed_lines(source: &str) -> Vec<&str> {
    source.lines().map(str::trim).collect()
}
