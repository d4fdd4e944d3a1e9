//! Greedy word wrapping measured in terminal columns
//!
//! Toasts and dialogs size themselves from the wrapped line count, so the
//! wrapping has to be done up front rather than left to `Paragraph`.

use ratatui::text::Span;

/// Display width of `text` in terminal columns
pub fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Wraps `text` to `width` columns
///
/// Explicit line breaks are kept (blank lines included). Words wider than
/// `width` are split at character boundaries.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut buf = [0u8; 4];

    for raw_line in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in raw_line.split_whitespace() {
            let word_width = display_width(word);

            if word_width > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                for ch in word.chars() {
                    let ch_width = display_width(ch.encode_utf8(&mut buf));
                    if current_width + ch_width > width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
                continue;
            }

            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed > width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            } else {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_width = needed;
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_breaks_between_words() {
        assert_eq!(wrap_text("hello world foo", 11), vec!["hello world", "foo"]);
    }

    #[test]
    fn test_wrap_keeps_explicit_line_breaks() {
        assert_eq!(wrap_text("first\n\nthird", 20), vec!["first", "", "third"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_long_word_after_short_word() {
        assert_eq!(wrap_text("ab cdefgh", 4), vec!["ab", "cdef", "gh"]);
    }

    #[test]
    fn test_wrap_zero_width_is_empty() {
        assert!(wrap_text("anything", 0).is_empty());
    }

    #[test]
    fn test_wrap_empty_text_is_empty() {
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn test_wrap_measures_wide_characters() {
        // Each CJK character takes two columns
        assert_eq!(wrap_text("确定取消", 4), vec!["确定", "取消"]);
        assert_eq!(display_width("确定"), 4);
    }

    #[test]
    fn test_wrapped_lines_fit_width() {
        let text = "The quick brown fox jumps over the lazy dog and keeps running";
        for line in wrap_text(text, 12) {
            assert!(display_width(&line) <= 12, "line too wide: {:?}", line);
        }
    }
}
