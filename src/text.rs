//! Text Helpers
//!
//! Parsing of the semi-structured free-text fields the API returns and
//! truncation for card previews.

/// Split a delimited field (`;` or newline separated) into trimmed,
/// non-empty items. Absent or empty input yields an empty list.
pub fn parse_list_items(text: &str) -> Vec<String> {
    text.split([';', '\n'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Truncate `text` to at most `max_len` characters, backing up to the last
/// whitespace boundary so words are not cut mid-way, then append `...`.
/// Text already within the bound is returned unchanged.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_len).collect();
    let kept = match cut.rfind(char::is_whitespace) {
        Some(idx) => cut[..idx].trim_end().to_string(),
        None => cut,
    };
    format!("{}...", kept)
}
