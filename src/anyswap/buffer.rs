//! Host text buffer
//!
//!     The core never owns the document. Everything it needs from the host editor is expressed
//!     by the [TextBuffer] trait: pattern search, substring extraction, the two mutations used by
//!     a swap, logical line lookup and the cursor.
//!
//!     [StringBuffer] is the in-memory implementation used by the command-line host and the
//!     tests. All positions are byte offsets; line lookup keeps a table of line starts and
//!     answers with a binary search.

use regex::Regex;
use std::fmt;
use std::ops::Range;

use crate::anyswap::error::{AnySwapError, Result};

/// Capabilities consumed from the host editor.
pub trait TextBuffer {
    /// Span of the first match of `pattern` starting at or after `from`.
    fn find_next_match(&self, pattern: &Regex, from: usize) -> Option<Range<usize>>;

    fn substring(&self, span: Range<usize>) -> String;

    fn erase(&mut self, span: Range<usize>);

    fn insert(&mut self, pos: usize, text: &str);

    /// Start of the line `line_offset` lines away from the one holding `pos`.
    ///
    /// Offsets past the first or last line are clamped to it.
    fn line_start(&self, pos: usize, line_offset: isize) -> usize;

    /// End of the line `line_offset` lines away from the one holding `pos`, excluding the
    /// line break itself.
    fn line_end(&self, pos: usize, line_offset: isize) -> usize;

    fn cursor(&self) -> usize;

    /// Collapse the selection to a single point.
    fn set_cursor(&mut self, pos: usize);
}

/// An in-memory [TextBuffer] with a single cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
    cursor: usize,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl StringBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_cursor(text, 0)
    }

    pub fn with_cursor(text: impl Into<String>, cursor: usize) -> Self {
        let text = text.into();
        let line_starts = line_starts(&text);
        let cursor = cursor.min(text.len());
        Self {
            text,
            cursor,
            line_starts,
        }
    }

    /// Like [StringBuffer::with_cursor], but rejects a cursor outside the text instead of
    /// clamping it.
    pub fn try_with_cursor(text: impl Into<String>, cursor: usize) -> Result<Self> {
        let text = text.into();
        if cursor > text.len() {
            return Err(AnySwapError::OffsetOutOfRange {
                offset: cursor,
                len: text.len(),
            });
        }
        Ok(Self::with_cursor(text, cursor))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Zero-based line holding `pos` (clamped to the end of the text).
    pub fn line_of(&self, pos: usize) -> usize {
        let pos = pos.min(self.text.len());
        self.line_starts
            .partition_point(|&start| start <= pos)
            .saturating_sub(1)
    }

    fn line_at_offset(&self, pos: usize, line_offset: isize) -> usize {
        let last = self.line_starts.len().saturating_sub(1) as isize;
        let line = (self.line_of(pos) as isize).saturating_add(line_offset);
        line.clamp(0, last) as usize
    }
}

impl TextBuffer for StringBuffer {
    fn find_next_match(&self, pattern: &Regex, from: usize) -> Option<Range<usize>> {
        if from > self.text.len() {
            return None;
        }
        pattern.find_at(&self.text, from).map(|m| m.range())
    }

    fn substring(&self, span: Range<usize>) -> String {
        self.text.get(span).unwrap_or_default().to_string()
    }

    fn erase(&mut self, span: Range<usize>) {
        if self.text.get(span.clone()).is_none() {
            return;
        }
        self.text.replace_range(span, "");
        self.line_starts = line_starts(&self.text);
        self.cursor = self.cursor.min(self.text.len());
    }

    fn insert(&mut self, pos: usize, text: &str) {
        if !self.text.is_char_boundary(pos) {
            return;
        }
        self.text.insert_str(pos, text);
        self.line_starts = line_starts(&self.text);
    }

    fn line_start(&self, pos: usize, line_offset: isize) -> usize {
        self.line_starts[self.line_at_offset(pos, line_offset)]
    }

    fn line_end(&self, pos: usize, line_offset: isize) -> usize {
        let line = self.line_at_offset(pos, line_offset);
        match self.line_starts.get(line + 1) {
            Some(next) => next - 1,
            None => self.text.len(),
        }
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.text.len());
    }
}

impl fmt::Display for StringBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn line_starts(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    starts.extend(
        text.bytes()
            .enumerate()
            .filter(|(_, byte)| *byte == b'\n')
            .map(|(index, _)| index + 1),
    );
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_bounds() {
        let buffer = StringBuffer::new("ab\ncde\n\nf");
        assert_eq!(buffer.line_count(), 4);
        assert_eq!(buffer.line_start(4, 0), 3);
        assert_eq!(buffer.line_end(4, 0), 6);
        assert_eq!(buffer.line_start(4, -1), 0);
        assert_eq!(buffer.line_end(4, 1), 7);
        assert_eq!(buffer.line_end(4, 2), 9);
    }

    #[test]
    fn test_line_offsets_are_clamped() {
        let buffer = StringBuffer::new("one\ntwo");
        assert_eq!(buffer.line_start(1, -5), 0);
        assert_eq!(buffer.line_end(1, 5), 7);
        assert_eq!(buffer.line_end(100, 0), 7);
    }

    #[test]
    fn test_extreme_line_offsets_saturate() {
        let buffer = StringBuffer::new("x\nf(a, b)");
        assert_eq!(buffer.line_end(4, isize::MAX), 9);
        assert_eq!(buffer.line_start(4, isize::MIN), 0);
    }

    #[test]
    fn test_line_break_belongs_to_its_line() {
        let buffer = StringBuffer::new("ab\ncd");
        assert_eq!(buffer.line_of(2), 0);
        assert_eq!(buffer.line_of(3), 1);
    }

    #[test]
    fn test_edits_refresh_lines() {
        let mut buffer = StringBuffer::with_cursor("a\nb", 3);
        buffer.erase(1..2);
        assert_eq!(buffer.text(), "ab");
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.cursor(), 2);

        buffer.insert(1, "\n\n");
        assert_eq!(buffer.text(), "a\n\nb");
        assert_eq!(buffer.line_count(), 3);
    }

    #[test]
    fn test_invalid_spans_are_ignored() {
        let mut buffer = StringBuffer::new("héllo");
        buffer.erase(1..2);
        buffer.insert(2, "x");
        assert_eq!(buffer.text(), "héllo");
        assert_eq!(buffer.substring(1..2), "");
        assert_eq!(buffer.substring(1..3), "é");
    }

    #[test]
    fn test_try_with_cursor_rejects_outside_offsets() {
        assert!(StringBuffer::try_with_cursor("abc", 3).is_ok());
        let err = StringBuffer::try_with_cursor("abc", 4).unwrap_err();
        assert!(matches!(
            err,
            AnySwapError::OffsetOutOfRange { offset: 4, len: 3 }
        ));
    }

    #[test]
    fn test_find_next_match() {
        let buffer = StringBuffer::new("a1 b2");
        let pattern = Regex::new(r"[a-z]\d").unwrap();
        assert_eq!(buffer.find_next_match(&pattern, 0), Some(0..2));
        assert_eq!(buffer.find_next_match(&pattern, 1), Some(3..5));
        assert_eq!(buffer.find_next_match(&pattern, 4), None);
        assert_eq!(buffer.find_next_match(&pattern, 99), None);
    }
}
