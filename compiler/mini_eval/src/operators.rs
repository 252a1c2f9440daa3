//! Binary operator implementations for the evaluator.
//!
//! Dispatch is a single match on the operand kinds, then on the operator.
//! Anything not listed is a type mismatch; there is no implicit coercion.

use mini_ir::BinaryOp;

use crate::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, negative_repeat_count,
    repeat_too_large, EvalResult,
};
use crate::value::Value;

/// Checked arithmetic operation with overflow handling.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Checked division with zero guard.
#[inline]
fn checked_div(a: i64, b: i64) -> EvalResult {
    if b == 0 {
        Err(division_by_zero())
    } else {
        checked_arith(a.checked_div(b), "division")
    }
}

/// Evaluate `left op right`.
///
/// `&&` and `||` are included: by the time they get here both operands have
/// already been evaluated.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op),
        (Value::Int(count), Value::Str(s)) | (Value::Str(s), Value::Int(count))
            if op == BinaryOp::Times =>
        {
            repeat(s, *count)
        }
        (Value::Int(-1), Value::Bool(b)) if op == BinaryOp::Times => Ok(Value::Bool(!b)),
        _ => Err(binary_type_mismatch(op, left.type_name(), right.type_name())),
    }
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Plus => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Minus => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Times => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Divide => checked_div(a, b),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GEq => Ok(Value::Bool(a >= b)),
        BinaryOp::LogicAnd | BinaryOp::LogicOr => {
            Err(binary_type_mismatch(op, "integer", "integer"))
        }
    }
}

/// Strings concatenate and compare lexicographically by byte.
fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Plus => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::Str(joined))
        }
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GEq => Ok(Value::Bool(a >= b)),
        BinaryOp::Minus
        | BinaryOp::Times
        | BinaryOp::Divide
        | BinaryOp::LogicAnd
        | BinaryOp::LogicOr => Err(binary_type_mismatch(op, "string", "string")),
    }
}

/// Booleans support equality and the logical operators, nothing else.
fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::LogicAnd => Ok(Value::Bool(a && b)),
        BinaryOp::LogicOr => Ok(Value::Bool(a || b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NEq => Ok(Value::Bool(a != b)),
        BinaryOp::Plus
        | BinaryOp::Minus
        | BinaryOp::Times
        | BinaryOp::Divide
        | BinaryOp::Lt
        | BinaryOp::LEq
        | BinaryOp::Gt
        | BinaryOp::GEq => Err(binary_type_mismatch(op, "boolean", "boolean")),
    }
}

/// `s` repeated `count` times; zero gives the empty string.
///
/// The result buffer is reserved up front; a size the allocator refuses is
/// reported as `RepeatTooLarge`.
fn repeat(s: &str, count: i64) -> EvalResult {
    if count < 0 {
        return Err(negative_repeat_count());
    }
    if s.is_empty() || count == 0 {
        return Ok(Value::Str(String::new()));
    }
    let times = usize::try_from(count).map_err(|_| integer_overflow("string repetition"))?;
    let total = s
        .len()
        .checked_mul(times)
        .filter(|len| isize::try_from(*len).is_ok())
        .ok_or_else(|| integer_overflow("string repetition"))?;

    let mut repeated = String::new();
    repeated
        .try_reserve_exact(total)
        .map_err(|_| repeat_too_large(total))?;
    for _ in 0..times {
        repeated.push_str(s);
    }
    Ok(Value::Str(repeated))
}
