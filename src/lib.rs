//! # anyswap
//!
//! Swap the syntactic element under the cursor with its structural neighbor,
//! in any programming language, without per-language grammars.
//!
//! File Layout
//!
//!     Every invocation runs the same short pipeline, and each stage lives in its own module:
//!
//!     src/anyswap
//!       ├── lexing       Rule table and range scanner (text -> tokens)
//!       ├── parsing      Arena tree and the one-token-lookahead builder (tokens -> tree)
//!       ├── navigation   Structural neighbors and cursor lookup over the tree
//!       ├── swap         Resolver (cursor -> two spans), executor and the outward command
//!       ├── buffer       Host text buffer capabilities plus an in-memory implementation
//!       ├── formats      Debug renderings of the tree
//!       ├── config       Layered configuration with embedded defaults
//!       └── testing      Helpers for cursor-marked test sources
//!
//!     The tree is rebuilt from scratch for every invocation and dropped right after; the only
//!     state that outlives a call is the lazily compiled rule table.

pub mod anyswap;

pub use anyswap::buffer::{StringBuffer, TextBuffer};
pub use anyswap::swap::{SkipReason, SwapCommand, SwapDirection, SwapOutcome};
