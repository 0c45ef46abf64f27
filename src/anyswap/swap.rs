//! Swap
//!
//!     The outward command surface: one action, parameterized by a direction flag, that swaps
//!     the element under the cursor with its structural neighbor.
//!
//! The Swap Pipeline
//!
//!     1. Scan range. The cursor's line, extended by `scan.extend_lines` lines in the swap
//!        direction so a swap can reach across a line break.
//!     2. Resolve. See [resolver]. Tokenize the range, build the tree, locate the node under
//!        the cursor, ask the navigator for its neighbor pair and reduce the pair to two spans.
//!     3. Execute. See [executor]. Exchange the spans' text, later span first, and move the
//!        cursor onto the element that moved in the swap direction.
//!
//!     Every step can decline. A declined swap leaves the buffer untouched and reports a
//!     [SkipReason]; nothing is ever surfaced to the user as an error.

pub mod executor;
pub mod resolver;

use std::ops::Range;
use tracing::debug;

use crate::anyswap::buffer::TextBuffer;
use crate::anyswap::config::SwapConfig;

pub use executor::{cursor_after, swap_spans};
pub use resolver::{build_tree, resolve, resolve_in_tree, scan_range, SwapPair};

/// Which neighbor to swap with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    Forward,
    Backward,
}

impl SwapDirection {
    pub fn is_forward(self) -> bool {
        self == SwapDirection::Forward
    }
}

impl From<bool> for SwapDirection {
    fn from(forward: bool) -> Self {
        if forward {
            SwapDirection::Forward
        } else {
            SwapDirection::Backward
        }
    }
}

/// Why an invocation left the buffer alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum SkipReason {
    #[error("no element under the cursor")]
    NoTarget,
    #[error("no neighbor in the requested direction")]
    NoNeighbor,
    #[error("a closer can only be swapped with another closer")]
    CloserMismatch,
    #[error("spans are overlapping or out of order")]
    UnorderedSpans,
}

/// Result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    Swapped {
        /// Spans as they were before the swap, in document order
        first: Range<usize>,
        second: Range<usize>,
        cursor: usize,
    },
    Skipped(SkipReason),
}

impl SwapOutcome {
    pub fn is_swapped(&self) -> bool {
        matches!(self, SwapOutcome::Swapped { .. })
    }
}

/// The swap action, bound to a configuration.
#[derive(Debug, Clone, Default)]
pub struct SwapCommand {
    config: SwapConfig,
}

impl SwapCommand {
    pub fn new(config: SwapConfig) -> Self {
        Self { config }
    }

    /// Swap the element under the buffer's cursor with its neighbor.
    pub fn run<B: TextBuffer + ?Sized>(&self, buffer: &mut B, forward: bool) -> SwapOutcome {
        let direction = SwapDirection::from(forward);
        let pos = buffer.cursor();

        let result = resolve(buffer, pos, direction, &self.config.scan)
            .and_then(|pair| swap_spans(buffer, &pair).map(|()| pair));
        let pair = match result {
            Ok(pair) => pair,
            Err(reason) => {
                debug!(pos, ?direction, %reason, "swap skipped");
                return SwapOutcome::Skipped(reason);
            }
        };

        if self.config.cursor.follow_swap {
            buffer.set_cursor(cursor_after(&pair, direction));
        }
        debug!(
            first = ?pair.first,
            second = ?pair.second,
            ?direction,
            "swapped"
        );
        SwapOutcome::Swapped {
            first: pair.first,
            second: pair.second,
            cursor: buffer.cursor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anyswap::buffer::StringBuffer;
    use crate::anyswap::config::{CursorConfig, ScanConfig};

    #[test]
    fn test_direction_from_flag() {
        assert_eq!(SwapDirection::from(true), SwapDirection::Forward);
        assert_eq!(SwapDirection::from(false), SwapDirection::Backward);
        assert!(SwapDirection::Forward.is_forward());
    }

    #[test]
    fn test_run_swaps_and_moves_cursor() {
        let mut buffer = StringBuffer::with_cursor("f(a, b)", 2);
        let outcome = SwapCommand::default().run(&mut buffer, true);
        assert_eq!(
            outcome,
            SwapOutcome::Swapped {
                first: 2..3,
                second: 5..6,
                cursor: 6
            }
        );
        assert_eq!(buffer.text(), "f(b, a)");
    }

    #[test]
    fn test_run_can_leave_cursor_alone() {
        let config = SwapConfig {
            cursor: CursorConfig { follow_swap: false },
            ..SwapConfig::default()
        };
        let mut buffer = StringBuffer::with_cursor("f(a, b)", 2);
        let outcome = SwapCommand::new(config).run(&mut buffer, true);
        assert!(outcome.is_swapped());
        assert_eq!(buffer.text(), "f(b, a)");
        assert_eq!(buffer.cursor(), 2);
    }

    #[test]
    fn test_run_with_unbounded_scan() {
        let config = SwapConfig {
            scan: ScanConfig {
                extend_lines: usize::MAX,
            },
            ..SwapConfig::default()
        };
        let mut buffer = StringBuffer::with_cursor("x\nf(a, b)", 4);
        let outcome = SwapCommand::new(config).run(&mut buffer, true);
        assert!(outcome.is_swapped());
        assert_eq!(buffer.text(), "x\nf(b, a)");
    }

    #[test]
    fn test_run_reports_skip() {
        let mut buffer = StringBuffer::with_cursor("   ", 1);
        let outcome = SwapCommand::default().run(&mut buffer, true);
        assert_eq!(outcome, SwapOutcome::Skipped(SkipReason::NoTarget));
        assert_eq!(buffer.text(), "   ");
    }
}
