//! Small text helpers shared by render code.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string to the given display width, appending `…` if truncated.
///
/// The ellipsis counts against the budget, so the result never exceeds
/// `max_width` columns.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1; // room for the ellipsis
    let mut width = 0;
    let mut end = 0;
    for (idx, ch) in text.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        width += ch_width;
        end = idx + ch.len_utf8();
    }

    let mut truncated = text[..end].trim_end().to_string();
    truncated.push('…');
    truncated
}
