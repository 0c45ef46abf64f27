//! Navigation
//!
//!     Pure queries over a finished [ParseTree]: which node sits under the cursor, and which
//!     node is its structural neighbor to the right or to the left.
//!
//! Chain Flattening
//!
//!     Equal-priority operators build a left-leaning spine (`a, b, c` is `,(,(a, b), c)`).
//!     Navigation treats that spine as a flat list so that moving past one element lands on
//!     the next element, never on an intermediate link:
//!         - Going right, a node that is the last child of a non-terminal chain link pairs
//!           with whatever the link's own right neighbor is.
//!         - Going left, a previous sibling that is itself a link of the same chain is
//!           replaced by its last child.
//!
//!     A node is a non-terminal chain link when it is an operator, has a parent, and shares
//!     its parent's priority. A previous link with no children (an operator that never got a
//!     left operand) leaves nothing to pair with.
//!
//!     A left-associative chain is as deep as its list is long, so every query here walks the
//!     tree with loops and an explicit stack instead of recursion.

use crate::anyswap::lexing::{RuleClass, Token};
use crate::anyswap::parsing::{NodeId, ParseTree};

/// A `(left, right)` pair of neighbors. Either side may be missing.
pub type SiblingPair = (Option<NodeId>, Option<NodeId>);

impl ParseTree {
    /// Next child under the same parent.
    pub fn next_node(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id);
        let parent = node.parent?;
        self.children(parent).get(node.index + 1).copied()
    }

    /// Previous child under the same parent.
    pub fn prev_node(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id);
        let parent = node.parent?;
        let index = node.index.checked_sub(1)?;
        self.children(parent).get(index).copied()
    }

    fn is_chain_link(&self, id: NodeId) -> bool {
        let node = self.node(id);
        match node.parent {
            Some(parent) => {
                node.class == RuleClass::Operator && node.priority == self.node(parent).priority
            }
            None => false,
        }
    }

    /// The node paired with its nearest structural neighbor to the right.
    ///
    /// Climbs until some ancestor has a next sibling. The left side of the pair is the
    /// innermost node sitting below a chain link, or the ancestor where the climb stopped.
    pub fn right_sibling(&self, id: NodeId) -> SiblingPair {
        let mut current = id;
        let mut pinned = None;
        loop {
            let Some(parent) = self.parent(current) else {
                return (Some(pinned.unwrap_or(current)), None);
            };
            if let Some(next) = self.next_node(current) {
                return (Some(pinned.unwrap_or(current)), Some(next));
            }
            if pinned.is_none() && self.is_chain_link(parent) {
                pinned = Some(current);
            }
            current = parent;
        }
    }

    /// The node paired with its nearest structural neighbor to the left.
    pub fn left_sibling(&self, id: NodeId) -> SiblingPair {
        let mut current = id;
        loop {
            let Some(parent) = self.parent(current) else {
                return (None, Some(current));
            };
            let Some(prev) = self.prev_node(current) else {
                current = parent;
                continue;
            };
            let parent_node = self.node(parent);
            if parent_node.class == RuleClass::Operator
                && self.node(prev).priority == parent_node.priority
            {
                return (self.last_child(prev), Some(current));
            }
            return (Some(prev), Some(current));
        }
    }

    /// Deepest non-root node whose own span contains `pos`, first match in child order.
    ///
    /// That is the first qualifying node of a post-order walk: children left to right, then
    /// the node itself.
    pub fn locate(&self, pos: usize) -> Option<NodeId> {
        let mut stack = vec![(self.root(), 0usize)];
        while let Some(top) = stack.last_mut() {
            let (id, next) = *top;
            match self.children(id).get(next) {
                Some(&child) => {
                    top.1 += 1;
                    stack.push((child, 0));
                }
                None => {
                    stack.pop();
                    let node = self.node(id);
                    if !node.is_root() && node.contains(pos) {
                        return Some(id);
                    }
                }
            }
        }
        None
    }

    /// The raw token of a merged node that contains `pos`, with its index in the node.
    pub fn locate_inner(&self, id: NodeId, pos: usize) -> Option<(usize, &Token)> {
        self.node(id)
            .tokens
            .iter()
            .enumerate()
            .find(|(_, token)| token.contains(pos))
    }
}
