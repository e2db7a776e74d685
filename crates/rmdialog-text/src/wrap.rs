//! Greedy, character-level line wrapping.

use std::{fmt, ops::Deref};

use rmdialog_core::profiling::profile_function;

use crate::error::{TextError, TextResult};

/// One line of wrapped dialogue, a contiguous slice of the input text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WrappedLine(String);

impl WrappedLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes) in the line.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl Deref for WrappedLine {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WrappedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split `text` into lines whose measured width does not exceed `max_width`.
///
/// Characters are appended to the current line one at a time. When a
/// character would push a non-empty line past `max_width`, the line is closed
/// and the character starts the next one. There is no word-boundary handling,
/// so words are split wherever the width runs out. A lone character wider
/// than `max_width` still gets a line of its own; nothing is dropped.
///
/// ```
/// use rmdialog_text::wrap;
///
/// let lines = wrap("ab cd", 40, |s| s.chars().count() as u32 * 10).unwrap();
/// let lines: Vec<&str> = lines.iter().map(|l| l.as_str()).collect();
/// assert_eq!(lines, ["ab c", "d"]);
/// ```
pub fn wrap(
    text: &str,
    max_width: i32,
    mut measure: impl FnMut(&str) -> u32,
) -> TextResult<Vec<WrappedLine>> {
    profile_function!();
    if max_width <= 0 {
        return Err(TextError::NonPositiveWidth(max_width));
    }
    let max_width = max_width as u32;

    let mut lines = Vec::new();
    let mut candidate = String::new();

    for ch in text.chars() {
        let previous_len = candidate.len();
        candidate.push(ch);

        if previous_len > 0 && measure(&candidate) > max_width {
            candidate.truncate(previous_len);
            lines.push(WrappedLine(std::mem::take(&mut candidate)));
            candidate.push(ch);
        }
    }

    if !candidate.is_empty() {
        lines.push(WrappedLine(candidate));
    }

    tracing::trace!("Wrapped {} chars into {} lines", text.len(), lines.len());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{MonospaceMetrics, TextMetrics};

    fn mono_wrap(text: &str, max_width: i32) -> Vec<String> {
        let mut metrics = MonospaceMetrics::new(10, 20);
        wrap(text, max_width, |s| metrics.text_width(s))
            .unwrap()
            .into_iter()
            .map(|l| l.0)
            .collect()
    }

    #[test]
    fn wraps_mid_word_at_width() {
        let mut metrics = MonospaceMetrics::new(10, 20);
        let max_width = metrics.text_width("ab c") as i32;
        assert_eq!(mono_wrap("ab cd", max_width), ["ab c", "d"]);
    }

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(mono_wrap("Hi.", 100), ["Hi."]);
    }

    #[test]
    fn exact_fit_does_not_wrap() {
        assert_eq!(mono_wrap("abcd", 40), ["abcd"]);
        assert_eq!(mono_wrap("abcde", 40), ["abcd", "e"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(mono_wrap("", 100).is_empty());
    }

    #[test]
    fn overwide_characters_get_their_own_lines() {
        // Every character is wider than the column.
        assert_eq!(mono_wrap("abc", 5), ["a", "b", "c"]);
    }

    #[test]
    fn whitespace_is_kept_verbatim() {
        assert_eq!(mono_wrap("a  b", 20), ["a ", " b"]);
    }

    #[test]
    fn multibyte_characters_are_not_split() {
        assert_eq!(mono_wrap("héllo", 20), ["hé", "ll", "o"]);
    }

    #[test]
    fn non_positive_width_is_rejected_before_measuring() {
        let mut calls = 0;
        let result = wrap("abc", 0, |_| {
            calls += 1;
            0
        });
        assert!(matches!(result, Err(TextError::NonPositiveWidth(0))));
        assert_eq!(calls, 0);

        assert!(matches!(
            wrap("abc", -3, |_| 0),
            Err(TextError::NonPositiveWidth(-3))
        ));
    }

    #[test]
    fn wrapped_line_reports_chars() {
        let line = WrappedLine::new("héllo");
        assert_eq!(line.char_count(), 5);
        assert_eq!(line.len(), 6);
        assert_eq!(line.to_string(), "héllo");
    }
}
