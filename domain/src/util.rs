//! Shared utility functions.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Single-line preview of model output for log messages.
///
/// Newlines become `⏎` so a multi-line completion stays on one log line.
pub fn log_preview(s: &str, max_bytes: usize) -> String {
    let cut = truncate_str(s, max_bytes);
    let mut preview = cut.replace('\n', "⏎");
    if cut.len() < s.len() {
        preview.push('…');
    }
    preview
}
