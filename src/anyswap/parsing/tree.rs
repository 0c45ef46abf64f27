//! Parse tree arena
//!
//! Nodes are addressed by [NodeId]; parent, children and the index within the parent are
//! stored as ids, never as references. Node 0 is always the sentinel root.

use std::ops::Range;

use crate::anyswap::lexing::{RuleClass, Token, ROOT_PRIORITY};

/// Opaque node identifier within a [ParseTree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

/// A node in the parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    /// Tokens this node directly subsumes; more than one only after a merge
    pub tokens: Vec<Token>,
    pub priority: i32,
    pub class: RuleClass,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Position within the parent's children
    pub index: usize,
    /// Own span, from the first token's start to the last merged token's end
    pub span: Range<usize>,
}

impl ParseNode {
    /// The sentinel root: looser than every tier and never closed.
    fn root() -> Self {
        Self {
            tokens: Vec::new(),
            priority: ROOT_PRIORITY,
            class: RuleClass::Open,
            parent: None,
            children: Vec::new(),
            index: 0,
            span: 0..0,
        }
    }

    pub fn from_token(token: Token) -> Self {
        Self {
            priority: token.priority,
            class: token.class,
            span: token.span.clone(),
            tokens: vec![token],
            parent: None,
            children: Vec::new(),
            index: 0,
        }
    }

    /// Text of the defining (first) token.
    pub fn lexeme(&self) -> &str {
        self.tokens.first().map_or("", |token| token.text.as_str())
    }

    /// Concatenated text of all subsumed tokens.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|token| token.text.as_str()).collect()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Inclusive containment over the node's own span (not its bound).
    pub fn contains(&self, pos: usize) -> bool {
        self.span.start <= pos && pos <= self.span.end
    }
}

/// Arena holding every node built during one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
    nodes: Vec<ParseNode>,
}

impl ParseTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![ParseNode::root()],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn node(&self, id: NodeId) -> &ParseNode {
        &self.nodes[id.0]
    }

    /// True when nothing but the root was built.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children.first().copied()
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children.last().copied()
    }

    /// Minimal span covering the node and everything below it.
    ///
    /// Walks the first-child and last-child edges of the subtree; chains can be as deep as a
    /// list is long, so this never recurses.
    pub fn bound(&self, id: NodeId) -> Range<usize> {
        let span = &self.node(id).span;
        let (mut start, mut end) = (span.start, span.end);

        let mut current = id;
        while let Some(first) = self.first_child(current) {
            start = start.min(self.node(first).span.start);
            current = first;
        }
        current = id;
        while let Some(last) = self.last_child(current) {
            end = end.max(self.node(last).span.end);
            current = last;
        }
        start..end
    }

    pub(crate) fn alloc(&mut self, node: ParseNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Attach `child` as the last child of `parent`.
    pub(crate) fn add(&mut self, parent: NodeId, child: NodeId) {
        let index = self.nodes[parent.0].children.len();
        self.nodes[parent.0].children.push(child);
        let node = &mut self.nodes[child.0];
        node.parent = Some(parent);
        node.index = index;
    }

    /// Detach and return the last child of `parent`.
    pub(crate) fn pop(&mut self, parent: NodeId) -> Option<NodeId> {
        let child = self.nodes[parent.0].children.pop()?;
        self.nodes[child.0].parent = None;
        Some(child)
    }

    /// Put `node` in the last slot of `parent`, adopting the previous occupant as its first
    /// child.
    pub(crate) fn insert(&mut self, parent: NodeId, node: NodeId) {
        let last = self.pop(parent);
        self.add(parent, node);
        if let Some(last) = last {
            self.add(node, last);
        }
    }

    /// Absorb `other`'s tokens into `target`; the target takes over the newcomer's priority
    /// and class and extends its span to the newcomer's end.
    pub(crate) fn merge(&mut self, target: NodeId, other: ParseNode) {
        let node = &mut self.nodes[target.0];
        node.priority = other.priority;
        node.class = other.class;
        node.span.end = other.span.end;
        node.tokens.extend(other.tokens);
    }
}

impl Default for ParseTree {
    fn default() -> Self {
        Self::new()
    }
}
