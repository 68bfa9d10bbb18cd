//! Width-aware text helpers for table cells and wrapped paragraphs

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `width` display columns, marking cuts with `…`
pub fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Rows `s` takes when word-wrapped to `width` columns. A word carries its
/// trailing space, so the count never falls below what `Wrap` renders.
pub fn wrapped_height(s: &str, width: usize) -> usize {
    let width = width.max(1);
    let mut rows = 1;
    let mut used = 0;
    for word in s.split_inclusive(' ') {
        let w = UnicodeWidthStr::width(word);
        if used > 0 && used + w > width {
            rows += 1;
            used = 0;
        }
        if w > width {
            // Words longer than a row are broken across rows
            let extra = (w - 1) / width;
            rows += extra;
            used = w - extra * width;
        } else {
            used += w;
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_strings_are_unchanged() {
        assert_eq!(truncate("Amazon", 10), "Amazon");
        assert_eq!(truncate("Amazon", 6), "Amazon");
    }

    #[test]
    fn test_long_strings_are_cut_with_ellipsis() {
        let cut = truncate("Samsung Galaxy S24 Ultra 256GB", 10);
        assert_eq!(cut, "Samsung G…");
        assert_eq!(UnicodeWidthStr::width(cut.as_str()), 10);
    }

    #[test]
    fn test_wide_characters_count_double() {
        let cut = truncate("日本語テキスト", 5);
        assert_eq!(cut, "日本…");
        assert!(UnicodeWidthStr::width(cut.as_str()) <= 5);
    }

    #[test]
    fn test_wrapped_height_breaks_at_words() {
        assert_eq!(wrapped_height("", 10), 1);
        assert_eq!(wrapped_height("short", 10), 1);
        // "aaaa " + "bbbb " fill the row, "cccc" moves down
        assert_eq!(wrapped_height("aaaa bbbb cccc", 10), 2);
        assert_eq!(wrapped_height("abcdefg hijklmn", 10), 2);
        // 19 columns, but no word fits beside another
        assert_eq!(wrapped_height("abcdefg hijklmn opq", 10), 3);
    }

    #[test]
    fn test_wrapped_height_splits_long_words() {
        assert_eq!(wrapped_height("abcdefghijklmnopqrstuvwxy", 10), 3);
        assert_eq!(wrapped_height("ab abcdefghijklmnopqrst", 10), 3);
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(truncate("abc", 0), "");
    }
}
