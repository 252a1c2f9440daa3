//! Syntax tree visitor.
//!
//! A single `Visitor` trait is provided for read-only traversal. The visitor
//! may mutate its own state, but the tree is only ever borrowed immutably.
//!
//! The default `visit_node` calls [`walk_node`], which visits `left` then
//! `right`. Override `visit_node` to act on a node, then call `walk_node` to
//! continue into its children.
//!
//! # Example
//!
//! ```text
//! struct CountInts {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountInts {
//!     fn visit_node(&mut self, node: &'ast Node) {
//!         if let NodeKind::Int(_) = node.kind {
//!             self.count += 1;
//!         }
//!         walk_node(self, node);
//!     }
//! }
//! ```

use crate::ast::Node;
use mini_stack::ensure_sufficient_stack;

pub trait Visitor<'ast> {
    fn visit_node(&mut self, node: &'ast Node) {
        walk_node(self, node);
    }
}

/// Visit the children of `node` in `left`, `right` order.
pub fn walk_node<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: &'ast Node) {
    ensure_sufficient_stack(|| {
        if let Some(left) = node.left() {
            visitor.visit_node(left);
        }
        if let Some(right) = node.right() {
            visitor.visit_node(right);
        }
    });
}
