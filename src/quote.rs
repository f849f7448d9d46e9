const QUOTE: &str = "\"";
const ESCAPED_QUOTE: &str = "\\\"";

/// Wraps `raw` in double quotes, escaping each embedded `"` as `\"`.
pub fn quote(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    out.push_str(&raw.replace(QUOTE, ESCAPED_QUOTE));
    out.push('"');
    out
}

/// Strips one surrounding pair of double quotes, restoring escaped quotes
/// inside. Input that is not properly quoted (after trimming surrounding
/// whitespace) is returned unchanged.
pub fn unquote(quoted: &str) -> String {
    strip_delimited(quoted, '"', '"')
}

/// [`unquote`] for `{`…`}` pairs.
pub fn unbracket(bracketed: &str) -> String {
    strip_delimited(bracketed, '{', '}')
}

fn strip_delimited(text: &str, open: char, close: char) -> String {
    let trimmed = text.trim();
    if trimmed.len() >= 2 && trimmed.starts_with(open) && trimmed.ends_with(close) {
        trimmed[1..trimmed.len() - 1].replace(ESCAPED_QUOTE, QUOTE)
    } else {
        text.to_string()
    }
}
