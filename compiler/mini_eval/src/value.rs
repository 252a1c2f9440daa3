//! Runtime values.
//!
//! A value is exactly one of boolean, integer, string, or the undefined
//! kind. Operations never mutate their operands; each returns a fresh value
//! or a fatal [`EvalError`](crate::EvalError).

use std::fmt;

use mini_ir::BinaryOp;

use crate::errors::EvalResult;
use crate::operators::evaluate_binary;

/// A dynamically typed runtime value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
    /// The undefined kind. Statements evaluate to `Error(None)`; a message,
    /// when present, is shown when the value is rendered.
    Error(Option<String>),
}

impl Default for Value {
    fn default() -> Self {
        Value::Error(None)
    }
}

impl Value {
    /// Name of the value's kind, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Str(_) => "string",
            Value::Error(_) => "undefined",
        }
    }

    /// The boolean payload, or `None` for any other kind.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn add(&self, other: &Value) -> EvalResult {
        evaluate_binary(self, other, BinaryOp::Plus)
    }

    pub fn subtract(&self, other: &Value) -> EvalResult {
        evaluate_binary(self, other, BinaryOp::Minus)
    }

    /// Integer product, string repetition, or `-1 * bool` negation.
    pub fn multiply(&self, other: &Value) -> EvalResult {
        evaluate_binary(self, other, BinaryOp::Times)
    }

    /// Truncating integer division.
    pub fn divide(&self, other: &Value) -> EvalResult {
        evaluate_binary(self, other, BinaryOp::Divide)
    }

    pub fn less_than(&self, other: &Value) -> EvalResult {
        evaluate_binary(self, other, BinaryOp::Lt)
    }

    pub fn less_equal(&self, other: &Value) -> EvalResult {
        evaluate_binary(self, other, BinaryOp::LEq)
    }

    pub fn greater_than(&self, other: &Value) -> EvalResult {
        evaluate_binary(self, other, BinaryOp::Gt)
    }

    pub fn greater_equal(&self, other: &Value) -> EvalResult {
        evaluate_binary(self, other, BinaryOp::GEq)
    }

    /// Same-kind equality; comparing different kinds is an error.
    pub fn equals(&self, other: &Value) -> EvalResult {
        evaluate_binary(self, other, BinaryOp::Eq)
    }

    pub fn not_equals(&self, other: &Value) -> EvalResult {
        evaluate_binary(self, other, BinaryOp::NEq)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// The text written by `print`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Error(Some(message)) if !message.is_empty() => {
                write!(f, "RUNTIME ERROR {message}")
            }
            Value::Error(_) => f.write_str("TYPE ERROR"),
        }
    }
}

#[cfg(test)]
mod tests;
