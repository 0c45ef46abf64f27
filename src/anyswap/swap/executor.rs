//! Swap executor
//!
//! Applies a [SwapPair] to the host buffer. The later span is rewritten first so the earlier
//! span's offsets stay valid for the second edit.

use super::{SkipReason, SwapDirection, SwapPair};
use crate::anyswap::buffer::TextBuffer;

/// Exchange the text of the pair's spans. Overlapping or out-of-order spans leave the buffer
/// untouched.
pub fn swap_spans<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    pair: &SwapPair,
) -> Result<(), SkipReason> {
    let SwapPair { first, second } = pair;
    if first.end > second.start {
        return Err(SkipReason::UnorderedSpans);
    }
    let first_text = buffer.substring(first.clone());
    let second_text = buffer.substring(second.clone());

    buffer.erase(second.clone());
    buffer.insert(second.start, &first_text);
    buffer.erase(first.clone());
    buffer.insert(first.start, &second_text);
    Ok(())
}

/// Where the cursor lands after swapping `pair`: at the end of the right slot going forward,
/// at the start of the left slot going backward.
///
/// Both slot edges survive the swap: the texts trade places, so the right slot still ends
/// where `second` ended.
pub fn cursor_after(pair: &SwapPair, direction: SwapDirection) -> usize {
    match direction {
        SwapDirection::Forward => pair.second.end,
        SwapDirection::Backward => pair.first.start,
    }
}
