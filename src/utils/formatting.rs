//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Display width of a string; CJK characters count as two columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Left-align to `width` display columns (Japanese labels pad correctly,
/// unlike `format!("{:<w$}")` which counts chars).
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Right-align to `width` display columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(pad), s)
}
