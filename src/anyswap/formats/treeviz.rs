//! Treeviz formatter for parse trees
//!
//! One line per node. The sentinel root prints as `?`; every other node prints its
//! concatenated token text behind a connector, with two columns of prefix per nesting level.
//! Line breaks inside a label are shown as `⏎` so each node stays on its own line.
//!
//! Example, for `a + b * c`:
//!
//!     ?
//!     └─ +
//!       ├─ a
//!       └─ *
//!         ├─ b
//!         └─ c

use crate::anyswap::parsing::{NodeId, ParseTree};

const MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}

fn label(tree: &ParseTree, id: NodeId) -> String {
    let text = tree.node(id).text().replace('\n', "⏎");
    truncate(&text, MAX_LABEL_CHARS)
}

pub fn render(tree: &ParseTree) -> String {
    let mut result = String::from("?\n");
    append_children(&mut result, tree, tree.root(), "");
    result
}

fn append_node(result: &mut String, tree: &ParseTree, id: NodeId, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!("{}{} {}\n", prefix, connector, label(tree, id)));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, tree, id, &new_prefix);
}

fn append_children(result: &mut String, tree: &ParseTree, id: NodeId, prefix: &str) {
    let children = tree.children(id);
    for (i, &child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, tree, child, prefix, is_last);
    }
}
