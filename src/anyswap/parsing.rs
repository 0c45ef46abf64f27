//! Parsing
//!
//!     Tokens are folded into a rooted tree whose shape approximates bracket nesting and
//!     operator precedence. There is no grammar and no backtracking: every token is placed by
//!     comparing it with the current attachment point (the focus) and, for operators, with the
//!     focus's ancestors.
//!
//! Tree Shape
//!
//!     - Deeper nodes bind tighter. An operator swallows the most recent subtree as its left
//!       operand and takes the rightmost slot of the nearest strictly looser ancestor.
//!     - Equal-priority operators chain left-associatively, so `a, b, c` is a spine of two
//!       comma nodes, the inner one holding `a` and `b`.
//!     - A bracket pair collapses into a single node spanning opener..closer whose children are
//!       the bracket's contents. Adjacent atoms (`else if`, `pub fn`) merge into one node.
//!
//!     The tree lives in an arena ([ParseTree]) and is discarded after a single query. See
//!     [builder] for the four insertion rules.

pub mod builder;
pub mod tree;

pub use builder::{parse, TreeBuilder};
pub use tree::{NodeId, ParseNode, ParseTree};
