//! Runtime errors.
//!
//! Every runtime error is fatal: the evaluator returns it through `?` and
//! nothing inside the crate catches it. Errors are built only through the
//! factory functions below; the interpreter stamps the line of the node
//! that raised the error on the way out.

use mini_ir::BinaryOp;
use thiserror::Error;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("repeat count must be non-negative")]
    NegativeRepeatCount,
    #[error("cannot allocate {bytes} bytes for string repetition")]
    RepeatTooLarge { bytes: usize },

    // Operands
    #[error("operator `{}` cannot be applied to {left} and {right}", op.as_symbol())]
    BinaryTypeMismatch {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },

    // Statements
    #[error("boolean condition expected")]
    NonBooleanCondition,
    #[error("identifier expected as assignment target")]
    InvalidAssignmentTarget,

    // Bindings
    #[error("undefined identifier {name}")]
    UndefinedVariable { name: String },
}

/// A fatal runtime error, optionally tagged with its source line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    line: Option<u32>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, line: None }
    }

    /// Line of the node that raised the error, once known.
    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// Attach `line` unless a more precise line is already recorded.
    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line.get_or_insert(line);
        self
    }
}

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Integer overflow error.
#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

/// String repetition with a negative count.
#[cold]
pub fn negative_repeat_count() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NegativeRepeatCount)
}

/// String repetition whose result cannot be allocated.
#[cold]
pub fn repeat_too_large(bytes: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RepeatTooLarge { bytes })
}

/// Operator applied to operands of unsupported kinds.
#[cold]
pub fn binary_type_mismatch(op: BinaryOp, left: &'static str, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch { op, left, right })
}

/// `if` condition that is not a boolean.
#[cold]
pub fn non_boolean_condition() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonBooleanCondition)
}

/// Assignment whose left side is not an identifier.
#[cold]
pub fn invalid_assignment_target() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidAssignmentTarget)
}

/// Reference to a name with no binding.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_owned(),
    })
}
