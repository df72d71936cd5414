//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Render minutes as "NNh NNm", dropping the hour part below one hour.
/// es: 45 → "45m", 145 → "02h 25m"
pub fn mins2readable(mins: u32) -> String {
    let hours = mins / 60;
    let minutes = mins % 60;

    if hours == 0 {
        format!("{}m", minutes)
    } else {
        format!("{:02}h {:02}m", hours, minutes)
    }
}

/// Pad to `width` measured in display columns, not chars.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(pad))
}
