/// Appended to text cut by [`truncate`].
pub const ELLIPSIS: &str = "...";

/// Escapes markup-significant characters so `text` renders literally inside
/// element content or a quoted attribute.
pub fn escape(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Cuts `text` to `max_len` characters and appends [`ELLIPSIS`] when anything was cut.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_len).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Truncates raw text first and escapes afterwards, so an entity is never split.
pub fn excerpt(text: Option<&str>, max_len: usize) -> String {
    match text {
        Some(raw) => escape(Some(&truncate(raw.trim(), max_len))),
        None => String::new(),
    }
}
