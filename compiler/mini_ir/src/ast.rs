//! Syntax tree for mini programs.
//!
//! Every node owns at most two children, `left` and `right`, through `Box`.
//! The shape of each variant is fixed:
//!
//! | Kind            | left              | right                |
//! |-----------------|-------------------|----------------------|
//! | `StatementList` | first statement   | rest of list (opt.)  |
//! | `If`            | condition         | body statement       |
//! | `Assign`        | target            | value expression     |
//! | `Print`         | expression        | none                 |
//! | `Binary`        | left operand      | right operand        |
//! | leaves          | none              | none                 |
//!
//! An `Assign` target may be any node; rejecting non-identifiers is the
//! evaluator's job, not the constructor's.

use std::fmt;

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Plus,
    Minus,
    Times,
    Divide,
    LogicAnd,
    LogicOr,
    Eq,
    NEq,
    Lt,
    LEq,
    Gt,
    GEq,
}

impl BinaryOp {
    /// Source spelling of the operator.
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Times => "*",
            BinaryOp::Divide => "/",
            BinaryOp::LogicAnd => "&&",
            BinaryOp::LogicOr => "||",
            BinaryOp::Eq => "==",
            BinaryOp::NEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GEq => ">=",
        }
    }

    /// Whether the operator is `&&` or `||`.
    pub fn is_logical(self) -> bool {
        matches!(self, BinaryOp::LogicAnd | BinaryOp::LogicOr)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// The variant-specific payload of a [`Node`].
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    // Statements
    /// `first` runs before `rest`; the parser chains lists to the right.
    StatementList {
        first: Box<Node>,
        rest: Option<Box<Node>>,
    },
    If {
        condition: Box<Node>,
        body: Box<Node>,
    },
    Assign {
        target: Box<Node>,
        value: Box<Node>,
    },
    Print {
        expr: Box<Node>,
    },

    // Expressions
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },

    // Leaves
    Int(i64),
    Bool(bool),
    /// String literal contents, quotes already stripped.
    Str(String),
    Ident(String),
}

/// A syntax tree node tagged with the source line it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub line: u32,
    pub kind: NodeKind,
}

impl Node {
    #[inline]
    pub fn new(line: u32, kind: NodeKind) -> Self {
        Node { line, kind }
    }

    /// A statement list takes the line of its first statement.
    pub fn statement_list(first: Node, rest: Option<Node>) -> Self {
        Node::new(
            first.line,
            NodeKind::StatementList {
                first: Box::new(first),
                rest: rest.map(Box::new),
            },
        )
    }

    pub fn if_statement(line: u32, condition: Node, body: Node) -> Self {
        Node::new(
            line,
            NodeKind::If {
                condition: Box::new(condition),
                body: Box::new(body),
            },
        )
    }

    pub fn assignment(line: u32, target: Node, value: Node) -> Self {
        Node::new(
            line,
            NodeKind::Assign {
                target: Box::new(target),
                value: Box::new(value),
            },
        )
    }

    pub fn print(line: u32, expr: Node) -> Self {
        Node::new(
            line,
            NodeKind::Print {
                expr: Box::new(expr),
            },
        )
    }

    pub fn binary(line: u32, op: BinaryOp, left: Node, right: Node) -> Self {
        Node::new(
            line,
            NodeKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
        )
    }

    pub fn int(line: u32, value: i64) -> Self {
        Node::new(line, NodeKind::Int(value))
    }

    pub fn bool(line: u32, value: bool) -> Self {
        Node::new(line, NodeKind::Bool(value))
    }

    pub fn string(line: u32, value: impl Into<String>) -> Self {
        Node::new(line, NodeKind::Str(value.into()))
    }

    pub fn ident(line: u32, name: impl Into<String>) -> Self {
        Node::new(line, NodeKind::Ident(name.into()))
    }

    /// The left child, if this variant has one.
    pub fn left(&self) -> Option<&Node> {
        match &self.kind {
            NodeKind::StatementList { first: left, .. }
            | NodeKind::If {
                condition: left, ..
            }
            | NodeKind::Assign { target: left, .. }
            | NodeKind::Print { expr: left }
            | NodeKind::Binary { left, .. } => Some(&**left),
            NodeKind::Int(_) | NodeKind::Bool(_) | NodeKind::Str(_) | NodeKind::Ident(_) => None,
        }
    }

    /// The right child, if this variant has one.
    pub fn right(&self) -> Option<&Node> {
        match &self.kind {
            NodeKind::StatementList { rest, .. } => rest.as_deref(),
            NodeKind::If { body: right, .. }
            | NodeKind::Assign { value: right, .. }
            | NodeKind::Binary { right, .. } => Some(&**right),
            NodeKind::Print { .. }
            | NodeKind::Int(_)
            | NodeKind::Bool(_)
            | NodeKind::Str(_)
            | NodeKind::Ident(_) => None,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Int(_) | NodeKind::Bool(_) | NodeKind::Str(_) | NodeKind::Ident(_)
        )
    }

    /// The identifier name, when this node is an identifier reference.
    pub fn as_ident(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Ident(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Move this node's children onto `stack`, leaving a leaf behind.
    fn detach_children(&mut self, stack: &mut Vec<Box<Node>>) {
        if self.is_leaf() {
            return;
        }
        match std::mem::replace(&mut self.kind, NodeKind::Bool(false)) {
            NodeKind::StatementList { first, rest } => {
                stack.push(first);
                stack.extend(rest);
            }
            NodeKind::If {
                condition: a,
                body: b,
            }
            | NodeKind::Assign {
                target: a,
                value: b,
            }
            | NodeKind::Binary {
                left: a, right: b, ..
            } => {
                stack.push(a);
                stack.push(b);
            }
            NodeKind::Print { expr } => stack.push(expr),
            NodeKind::Int(_) | NodeKind::Bool(_) | NodeKind::Str(_) | NodeKind::Ident(_) => {}
        }
    }
}

/// Iterative teardown so that long statement chains do not exhaust the
/// native stack when a program is dropped.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.detach_children(&mut stack);
        while let Some(mut child) = stack.pop() {
            child.detach_children(&mut stack);
        }
    }
}
