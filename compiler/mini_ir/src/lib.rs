//! Mini IR - shared data types for the mini language.
//!
//! This crate contains the types every phase agrees on:
//! - `Token` and `TokenKind` produced by the lexer
//! - `Node` / `NodeKind`, the owned syntax tree built by the parser
//! - `BinaryOp`, the closed set of binary operators
//! - `Visitor` for read-only traversal, and the tree analytics built on it
//!
//! # Design Philosophy
//!
//! - **Closed sums**: node kinds and operators are enums, so every consumer
//!   matches exhaustively and a new kind cannot be silently ignored.
//! - **Owned trees**: each node owns its children through `Box`; dropping a
//!   node drops its subtree.
//! - **No evaluation here**: analytics borrow the tree immutably and never
//!   touch runtime state.

pub mod analysis;
pub mod ast;
pub mod token;
pub mod visitor;

pub use analysis::{distinct_identifiers, identifiers, leaf_count, string_count};
pub use ast::{BinaryOp, Node, NodeKind};
pub use token::{Token, TokenKind};
pub use visitor::{walk_node, Visitor};
