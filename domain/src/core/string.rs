//! String utilities for the domain layer.

/// Returns `true` when the value is absent for form purposes (empty or whitespace only)
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Used to keep user-supplied text short in log lines.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}
