//! Tree-walking interpreter.
//!
//! `eval` reduces a node to a [`Value`] against the interpreter's binding
//! table. Statements evaluate to the undefined value. The first runtime
//! error ends evaluation: it is returned through `?` from every level and
//! never caught here.

mod builder;

pub use builder::InterpreterBuilder;

use mini_ir::{BinaryOp, Node, NodeKind};
use mini_stack::ensure_sufficient_stack;

use crate::errors::{
    invalid_assignment_target, non_boolean_condition, undefined_variable, EvalError, EvalResult,
};
use crate::operators::evaluate_binary;
use crate::{Environment, SharedPrintHandler, Value};

/// Evaluates syntax trees against a binding table it owns.
pub struct Interpreter {
    env: Environment,
    print_handler: SharedPrintHandler,
}

impl Default for Interpreter {
    fn default() -> Self {
        InterpreterBuilder::new().build()
    }
}

impl Interpreter {
    /// An interpreter with an empty binding table that prints to stdout.
    pub fn new() -> Self {
        Interpreter::default()
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn into_env(self) -> Environment {
        self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Run a program to completion or to its first runtime error.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, program: &Node) -> Result<(), EvalError> {
        match self.eval(program) {
            Ok(_) => Ok(()),
            Err(error) => {
                tracing::debug!(line = ?error.line(), %error, "runtime error aborted evaluation");
                Err(error)
            }
        }
    }

    /// Evaluate one node.
    ///
    /// Errors are tagged with the line of the innermost node that raised them.
    pub fn eval(&mut self, node: &Node) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(node)).map_err(|e| e.with_line(node.line))
    }

    fn eval_inner(&mut self, node: &Node) -> EvalResult {
        match &node.kind {
            NodeKind::StatementList { .. } => self.eval_statements(node),
            NodeKind::If { condition, body } => match self.eval(condition)?.as_bool() {
                Some(true) => self.eval(body),
                Some(false) => Ok(Value::default()),
                None => Err(non_boolean_condition()),
            },
            NodeKind::Assign { target, value } => {
                let Some(name) = target.as_ident() else {
                    return Err(invalid_assignment_target());
                };
                let value = self.eval(value)?;
                tracing::debug!(name, %value, "bind");
                self.env.assign(name, value);
                Ok(Value::default())
            }
            NodeKind::Print { expr } => {
                let value = self.eval(expr)?;
                self.print_handler.println(&value.to_string());
                Ok(Value::default())
            }
            NodeKind::Binary { op, left, right } => self.eval_binary(*op, left, right),
            NodeKind::Int(n) => Ok(Value::Int(*n)),
            NodeKind::Bool(b) => Ok(Value::Bool(*b)),
            NodeKind::Str(s) => Ok(Value::Str(s.clone())),
            NodeKind::Ident(name) => self
                .env
                .get(name)
                .cloned()
                .ok_or_else(|| undefined_variable(name)),
        }
    }

    /// Walk a right-leaning statement chain in order.
    ///
    /// Loops instead of recursing along `rest`, so program length does not
    /// turn into stack depth.
    fn eval_statements(&mut self, list: &Node) -> EvalResult {
        let mut cursor = Some(list);
        while let Some(node) = cursor {
            match &node.kind {
                NodeKind::StatementList { first, rest } => {
                    self.eval(first)?;
                    cursor = rest.as_deref();
                }
                _ => {
                    self.eval(node)?;
                    cursor = None;
                }
            }
        }
        Ok(Value::default())
    }

    /// `&&` and `||` evaluate the right operand first and both always run.
    fn eval_binary(&mut self, op: BinaryOp, left: &Node, right: &Node) -> EvalResult {
        let (lhs, rhs) = if op.is_logical() {
            let rhs = self.eval(right)?;
            (self.eval(left)?, rhs)
        } else {
            let lhs = self.eval(left)?;
            (lhs, self.eval(right)?)
        };
        evaluate_binary(&lhs, &rhs, op)
    }
}

#[cfg(test)]
mod tests;
