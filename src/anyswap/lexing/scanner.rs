//! Range scanner
//!
//! Walks `[begin, end)` of the host text with the combined lexeme pattern and classifies
//! every match. Matches are searched through the host, so the scan sees exactly what the
//! editor sees.

use std::ops::Range;
use tracing::trace;

use super::rules::LEXEME_PATTERN;
use super::token::Token;
use crate::anyswap::buffer::TextBuffer;

/// Scan `range` of `buffer` into a position-ordered token sequence.
///
/// Scanning stops at the first match starting at or beyond `range.end`; a match straddling
/// the end is dropped. An exhausted search simply ends the sequence early.
pub fn tokenize<B: TextBuffer + ?Sized>(buffer: &B, range: Range<usize>) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut curr = range.start;

    while curr < range.end {
        let Some(found) = buffer.find_next_match(&LEXEME_PATTERN, curr) else {
            break;
        };
        if found.start >= range.end || found.end <= curr {
            break;
        }
        curr = found.end;
        if found.end <= range.end {
            tokens.push(Token::new(buffer.substring(found.clone()), found));
        }
    }

    trace!(
        start = range.start,
        end = range.end,
        count = tokens.len(),
        "scanned range"
    );
    tokens
}
