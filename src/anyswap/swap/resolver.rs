//! Swap resolver
//!
//! Turns a cursor position and a direction into the two spans to exchange.

use std::ops::Range;
use tracing::debug;

use super::{SkipReason, SwapDirection};
use crate::anyswap::buffer::TextBuffer;
use crate::anyswap::config::ScanConfig;
use crate::anyswap::lexing::{tokenize, RuleClass};
use crate::anyswap::parsing::{parse, NodeId, ParseTree};

/// Two spans in document order: `first` is the left element, `second` the right one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapPair {
    pub first: Range<usize>,
    pub second: Range<usize>,
}

impl SwapPair {
    pub fn new(first: Range<usize>, second: Range<usize>) -> Self {
        Self { first, second }
    }
}

/// The text tokenized for one invocation: the cursor's line reaching `extend_lines` lines
/// in the swap direction.
pub fn scan_range<B: TextBuffer + ?Sized>(
    buffer: &B,
    pos: usize,
    direction: SwapDirection,
    scan: &ScanConfig,
) -> Range<usize> {
    let reach = isize::try_from(scan.extend_lines).unwrap_or(isize::MAX);
    match direction {
        SwapDirection::Forward => buffer.line_start(pos, 0)..buffer.line_end(pos, reach),
        SwapDirection::Backward => buffer.line_start(pos, -reach)..buffer.line_end(pos, 0),
    }
}

/// Tokenize `range` and build its tree.
pub fn build_tree<B: TextBuffer + ?Sized>(buffer: &B, range: Range<usize>) -> ParseTree {
    parse(tokenize(buffer, range))
}

/// Find the pair of spans a swap at `pos` would exchange.
pub fn resolve<B: TextBuffer + ?Sized>(
    buffer: &B,
    pos: usize,
    direction: SwapDirection,
    scan: &ScanConfig,
) -> Result<SwapPair, SkipReason> {
    let range = scan_range(buffer, pos, direction, scan);
    debug!(pos, ?range, ?direction, "resolving swap");
    let tree = build_tree(buffer, range);
    resolve_in_tree(&tree, pos, direction)
}

/// [resolve] over an already built tree.
pub fn resolve_in_tree(
    tree: &ParseTree,
    pos: usize,
    direction: SwapDirection,
) -> Result<SwapPair, SkipReason> {
    let target = tree.locate(pos).ok_or(SkipReason::NoTarget)?;
    let (left, right) = match direction {
        SwapDirection::Forward => tree.right_sibling(target),
        SwapDirection::Backward => tree.left_sibling(target),
    };

    if let (Some(left), Some(right)) = (left, right) {
        let is_close = |id: NodeId| tree.node(id).class == RuleClass::Close;
        if is_close(left) != is_close(right) {
            return Err(SkipReason::CloserMismatch);
        }
        return Ok(SwapPair::new(tree.bound(left), tree.bound(right)));
    }

    if tree.parent(target) == Some(tree.root()) {
        return inner_pair(tree, target, pos, direction);
    }
    Err(SkipReason::NoNeighbor)
}

/// Token-level pair inside a merged run, for nodes with no structural neighbor.
fn inner_pair(
    tree: &ParseTree,
    target: NodeId,
    pos: usize,
    direction: SwapDirection,
) -> Result<SwapPair, SkipReason> {
    let (index, token) = tree
        .locate_inner(target, pos)
        .ok_or(SkipReason::NoTarget)?;
    let tokens = &tree.node(target).tokens;
    let pair = match direction {
        SwapDirection::Forward => tokens
            .get(index + 1)
            .map(|next| SwapPair::new(token.span.clone(), next.span.clone())),
        SwapDirection::Backward => index
            .checked_sub(1)
            .map(|prev| SwapPair::new(tokens[prev].span.clone(), token.span.clone())),
    };
    pair.ok_or(SkipReason::NoNeighbor)
}
