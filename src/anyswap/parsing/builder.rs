//! Tree Builder
//!
//! Single-pass, one-token-lookahead construction of the parse tree. Each token is dispatched
//! on its [RuleClass]:
//!
//! - Atom: merges into an atom focus (a run of words becomes one node), otherwise attaches as
//!   the focus's next child, after leaving a complete (atom/close) focus for its parent.
//! - Open: attaches like an atom, then bracket openers register the closer they wait for.
//! - Close: a newline after an open continuation is a soft wrap and is dropped. A closer the
//!   wait stack expects collapses the bracket group into its opener. Anything else is treated
//!   as a loose operator.
//! - Operator: climbs past every ancestor binding tighter or equal, then takes the last slot
//!   of the ancestor where the climb stopped, adopting the previous occupant as left operand.
//!
//! Unmatched closers and dangling openers are tolerated; the tree stays well formed.

use tracing::trace;

use super::tree::{NodeId, ParseNode, ParseTree};
use crate::anyswap::lexing::{matching_closer, RuleClass, Token};

/// Incremental builder state: the tree, the focus and the pending bracket obligations.
#[derive(Debug)]
pub struct TreeBuilder {
    tree: ParseTree,
    focus: NodeId,
    wait_stack: Vec<(&'static str, NodeId)>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        let tree = ParseTree::new();
        let focus = tree.root();
        Self {
            tree,
            focus,
            wait_stack: Vec::new(),
        }
    }

    pub fn tree(&self) -> &ParseTree {
        &self.tree
    }

    /// Openers still waiting for their closer.
    pub fn pending_openers(&self) -> usize {
        self.wait_stack.len()
    }

    pub fn add(&mut self, token: Token) {
        trace!(token = %token.text.escape_debug(), class = %token.class, "add");
        let node = ParseNode::from_token(token);
        match node.class {
            RuleClass::Atom => self.add_atom(node),
            RuleClass::Open => self.add_open(node),
            RuleClass::Close => self.add_close(node),
            RuleClass::Operator => self.add_operator(node),
        }
    }

    pub fn finish(self) -> ParseTree {
        if !self.wait_stack.is_empty() {
            trace!(dangling = self.wait_stack.len(), "unclosed openers left open");
        }
        self.tree
    }

    fn focus_node(&self) -> &ParseNode {
        self.tree.node(self.focus)
    }

    /// Leave a complete focus (atom or closed) for its parent.
    fn leave_complete_focus(&mut self) {
        if self.focus_node().class.is_continuation() {
            return;
        }
        if let Some(parent) = self.focus_node().parent {
            self.focus = parent;
        }
    }

    fn add_atom(&mut self, node: ParseNode) {
        if self.focus_node().class == RuleClass::Atom {
            self.tree.merge(self.focus, node);
            return;
        }
        self.leave_complete_focus();
        let id = self.tree.alloc(node);
        self.tree.add(self.focus, id);
        self.focus = id;
    }

    fn add_open(&mut self, node: ParseNode) {
        let closer = matching_closer(node.lexeme());
        self.add_atom(node);
        if let Some(closer) = closer {
            self.wait_stack.push((closer, self.focus));
        }
    }

    fn add_close(&mut self, node: ParseNode) {
        if node.lexeme() == "\n" {
            if self.focus_node().class.is_continuation() {
                trace!("soft line break ignored");
                return;
            }
        } else if self
            .wait_stack
            .last()
            .is_some_and(|(expected, _)| *expected == node.lexeme())
        {
            if let Some((_, opener)) = self.wait_stack.pop() {
                self.focus = opener;
                self.tree.merge(opener, node);
                return;
            }
        }
        self.add_operator(node);
    }

    fn add_operator(&mut self, node: ParseNode) {
        self.leave_complete_focus();
        while self.focus_node().priority >= node.priority {
            match self.focus_node().parent {
                Some(parent) => self.focus = parent,
                None => break,
            }
        }
        let id = self.tree.alloc(node);
        self.tree.insert(self.focus, id);
        self.focus = id;
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold a token sequence into a fresh tree.
pub fn parse(tokens: impl IntoIterator<Item = Token>) -> ParseTree {
    let mut builder = TreeBuilder::new();
    for token in tokens {
        builder.add(token);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anyswap::buffer::StringBuffer;
    use crate::anyswap::lexing::tokenize;

    fn build(source: &str) -> TreeBuilder {
        let buffer = StringBuffer::new(source);
        let mut builder = TreeBuilder::new();
        for token in tokenize(&buffer, 0..source.len()) {
            builder.add(token);
        }
        builder
    }

    fn texts(tree: &ParseTree, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|id| tree.node(*id).text()).collect()
    }

    #[test]
    fn test_adjacent_atoms_merge() {
        let builder = build("pub fn main");
        let tree = builder.tree();
        let root_children = tree.children(tree.root());
        assert_eq!(texts(tree, root_children), vec!["pubfnmain"]);
        assert_eq!(tree.node(root_children[0]).tokens.len(), 3);
    }

    #[test]
    fn test_operator_takes_left_operand() {
        let builder = build("a + b");
        let tree = builder.tree();
        let plus = tree.children(tree.root())[0];
        assert_eq!(tree.node(plus).text(), "+");
        assert_eq!(texts(tree, tree.children(plus)), vec!["a", "b"]);
    }

    #[test]
    fn test_tighter_operator_nests_deeper() {
        let tree = build("a + b * c").finish();
        let plus = tree.children(tree.root())[0];
        let star = tree.children(plus)[1];
        assert_eq!(tree.node(star).text(), "*");
        assert_eq!(texts(&tree, tree.children(star)), vec!["b", "c"]);
    }

    #[test]
    fn test_looser_operator_climbs() {
        let tree = build("a * b + c").finish();
        let plus = tree.children(tree.root())[0];
        assert_eq!(tree.node(plus).text(), "+");
        let star = tree.children(plus)[0];
        assert_eq!(texts(&tree, tree.children(star)), vec!["a", "b"]);
        assert_eq!(tree.node(tree.children(plus)[1]).text(), "c");
    }

    #[test]
    fn test_equal_priority_chains_left() {
        let tree = build("a, b, c").finish();
        let outer = tree.children(tree.root())[0];
        let inner = tree.children(outer)[0];
        assert_eq!(tree.node(outer).text(), ",");
        assert_eq!(texts(&tree, tree.children(inner)), vec!["a", "b"]);
        assert_eq!(tree.node(tree.children(outer)[1]).text(), "c");
    }

    #[test]
    fn test_bracket_group_collapses() {
        let builder = build("f(a, b)");
        assert_eq!(builder.pending_openers(), 0);
        let tree = builder.tree();
        let call = tree.children(tree.root())[0];
        let node = tree.node(call);
        assert_eq!(node.text(), "f()");
        assert_eq!(node.class, RuleClass::Close);
        assert_eq!(node.span, 0..7);
        let comma = tree.children(call)[0];
        assert_eq!(texts(tree, tree.children(comma)), vec!["a", "b"]);
    }

    #[test]
    fn test_nested_brackets_match_innermost() {
        let tree = build("[(a), {b}]").finish();
        let list = tree.children(tree.root())[0];
        assert_eq!(tree.node(list).text(), "[]");
        let comma = tree.children(list)[0];
        assert_eq!(texts(&tree, tree.children(comma)), vec!["()", "{}"]);
    }

    #[test]
    fn test_soft_line_break_after_operator() {
        let tree = build("a +\nb").finish();
        let plus = tree.children(tree.root())[0];
        assert_eq!(texts(&tree, tree.children(plus)), vec!["a", "b"]);
    }

    #[test]
    fn test_statement_terminators_split_statements() {
        let tree = build("a = 1; b = 2;").finish();
        let statements = tree.children(tree.root());
        assert_eq!(texts(&tree, statements), vec![";", ";"]);
        let first = tree.children(statements[0])[0];
        assert_eq!(tree.node(first).text(), "=");
    }

    #[test]
    fn test_unmatched_closer_degrades_to_operator() {
        let builder = build("a) b");
        assert_eq!(builder.pending_openers(), 0);
        let tree = builder.tree();
        let closer = tree.children(tree.root())[0];
        assert_eq!(tree.node(closer).text(), ")");
        assert_eq!(texts(tree, tree.children(closer)), vec!["a"]);
    }

    #[test]
    fn test_dangling_opener_stays_open() {
        let builder = build("f(a, b");
        assert_eq!(builder.pending_openers(), 1);
        let tree = builder.tree();
        let call = tree.children(tree.root())[0];
        assert_eq!(tree.node(call).class, RuleClass::Open);
        assert_eq!(tree.bound(call), 0..6);
    }

    #[test]
    fn test_prefix_operator_binds_its_operand() {
        let tree = build("!a && b").finish();
        let and = tree.children(tree.root())[0];
        assert_eq!(tree.node(and).text(), "&&");
        assert_eq!(texts(&tree, tree.children(and)), vec!["!", "b"]);
    }

    #[test]
    fn test_operator_at_group_start_has_no_left_operand() {
        let tree = build("(- a)").finish();
        let group = tree.children(tree.root())[0];
        let minus = tree.children(group)[0];
        assert_eq!(texts(&tree, tree.children(minus)), vec!["a"]);
    }
}
