//! Testing utilities for swap assertions
//!
//! Swap tests are easiest to read when the cursor is drawn into the source itself. The
//! helpers here use [CURSOR_MARK] for that: `f(¦a, b)` is the text `f(a, b)` with the cursor
//! at offset 2.
//!
//! ```rust-example
//! use anyswap::anyswap::testing::swap_marked;
//!
//! assert_eq!(swap_marked("f(¦a, b)", true), "f(b, a¦)");
//! assert_eq!(swap_marked("f(a, ¦b)", false), "f(¦b, a)");
//! ```
//!
//! A source without a mark puts the cursor at the start. Only the first mark counts; it is
//! a character that never appears in the rule table, so it cannot be mistaken for code.

use crate::anyswap::buffer::{StringBuffer, TextBuffer};
use crate::anyswap::swap::SwapCommand;

pub const CURSOR_MARK: char = '¦';

/// Build a buffer from a cursor-marked source.
pub fn marked(source: &str) -> StringBuffer {
    match source.find(CURSOR_MARK) {
        Some(cursor) => {
            let mut text = source.to_string();
            text.replace_range(cursor..cursor + CURSOR_MARK.len_utf8(), "");
            StringBuffer::with_cursor(text, cursor)
        }
        None => StringBuffer::new(source),
    }
}

/// Render a buffer with its cursor drawn in.
pub fn render_marked(buffer: &StringBuffer) -> String {
    let mut text = buffer.text().to_string();
    text.insert(buffer.cursor(), CURSOR_MARK);
    text
}

/// Run one default swap on a cursor-marked source and render the result the same way.
pub fn swap_marked(source: &str, forward: bool) -> String {
    let mut buffer = marked(source);
    SwapCommand::default().run(&mut buffer, forward);
    render_marked(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marked_extracts_cursor() {
        let buffer = marked("f(¦a, b)");
        assert_eq!(buffer.text(), "f(a, b)");
        assert_eq!(buffer.cursor(), 2);
    }

    #[test]
    fn test_unmarked_source_starts_at_zero() {
        assert_eq!(marked("a + b").cursor(), 0);
    }

    #[test]
    fn test_render_marked_round_trips() {
        assert_eq!(render_marked(&marked("x ¦= y")), "x ¦= y");
    }

    #[test]
    fn test_swap_marked() {
        assert_eq!(swap_marked("f(¦a, b)", true), "f(b, a¦)");
        assert_eq!(swap_marked("f(a, ¦b)", false), "f(¦b, a)");
    }
}
