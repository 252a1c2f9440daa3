//! Read-only structural analytics over a syntax tree.
//!
//! These queries only borrow the tree. They never evaluate a node and hold
//! no state between calls: every call builds its result from scratch.

use rustc_hash::FxHashSet;

use crate::ast::{Node, NodeKind};
use crate::visitor::{walk_node, Visitor};

/// Number of nodes with no children (literals and identifier references).
pub fn leaf_count(root: &Node) -> usize {
    struct Leaves(usize);

    impl<'ast> Visitor<'ast> for Leaves {
        fn visit_node(&mut self, node: &'ast Node) {
            if node.is_leaf() {
                self.0 += 1;
            }
            walk_node(self, node);
        }
    }

    let mut leaves = Leaves(0);
    leaves.visit_node(root);
    leaves.0
}

/// Number of string literal nodes.
pub fn string_count(root: &Node) -> usize {
    struct Strings(usize);

    impl<'ast> Visitor<'ast> for Strings {
        fn visit_node(&mut self, node: &'ast Node) {
            if let NodeKind::Str(_) = node.kind {
                self.0 += 1;
            }
            walk_node(self, node);
        }
    }

    let mut strings = Strings(0);
    strings.visit_node(root);
    strings.0
}

/// Every identifier reference in pre-order, duplicates included.
///
/// Assignment targets count as references.
pub fn identifiers(root: &Node) -> Vec<String> {
    collect_identifiers(root).into_iter().map(str::to_owned).collect()
}

/// Identifiers in order of first appearance, each listed once.
pub fn distinct_identifiers(root: &Node) -> Vec<String> {
    let mut seen = FxHashSet::default();
    collect_identifiers(root)
        .into_iter()
        .filter(|name| seen.insert(*name))
        .map(str::to_owned)
        .collect()
}

fn collect_identifiers(root: &Node) -> Vec<&str> {
    struct Idents<'ast>(Vec<&'ast str>);

    impl<'ast> Visitor<'ast> for Idents<'ast> {
        fn visit_node(&mut self, node: &'ast Node) {
            if let Some(name) = node.as_ident() {
                self.0.push(name);
            }
            walk_node(self, node);
        }
    }

    let mut idents = Idents(Vec::new());
    idents.visit_node(root);
    idents.0
}
