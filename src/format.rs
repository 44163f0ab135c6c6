use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::system::memory::{bytes_to_mb, gb_to_mb};

/// Cuts `s` to at most `max_width` terminal columns, ending in an ellipsis
/// when anything was dropped.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('\u{2026}');
    out
}

/// Left-aligns `s` in a `width`-column cell, truncating if needed.
/// `format!("{:<w$}")` pads by chars, which misaligns wide glyphs.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let cell = truncate_to_width(s, width);
    let pad = width.saturating_sub(cell.width());
    format!("{cell}{}", " ".repeat(pad))
}

pub fn format_mb(bytes: u64) -> String {
    format!("{:.1} MB", bytes_to_mb(bytes))
}

pub fn format_gb_with_mb(gb: f64) -> String {
    format!("{gb:.2} GB ({:.0} MB)", gb_to_mb(gb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_are_untouched() {
        assert_eq!(truncate_to_width("sshd", 10), "sshd");
        assert_eq!(truncate_to_width("", 3), "");
    }

    #[test]
    fn long_names_get_ellipsis() {
        assert_eq!(truncate_to_width("Google Chrome Helper", 8), "Google \u{2026}");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn wide_glyphs_count_double() {
        let out = truncate_to_width("\u{8FDB}\u{7A0B}\u{7BA1}\u{7406}", 5);
        assert_eq!(out, "\u{8FDB}\u{7A0B}\u{2026}");
        assert_eq!(out.width(), 5);
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_to_width("ab", 5), "ab   ");
        assert_eq!(pad_to_width("\u{8FDB}", 4), "\u{8FDB}  ");
        assert_eq!(pad_to_width("abcdefgh", 4).width(), 4);
    }

    #[test]
    fn size_formats() {
        assert_eq!(format_mb(100 * 1024 * 1024), "100.0 MB");
        assert_eq!(format_mb(0), "0.0 MB");
        assert_eq!(format_gb_with_mb(16.0), "16.00 GB (16384 MB)");
    }
}
