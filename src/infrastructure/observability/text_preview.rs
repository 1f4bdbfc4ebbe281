const MAX_VISIBLE_CHARS: usize = 100;

/// Shorten user text for log lines. Input documents can run to megabytes;
/// only a prefix and the total size are worth recording.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    match trimmed.char_indices().nth(MAX_VISIBLE_CHARS) {
        Some((byte_end, _)) => format!(
            "{}... ({} chars total)",
            &trimmed[..byte_end],
            trimmed.chars().count()
        ),
        None => trimmed.to_string(),
    }
}
